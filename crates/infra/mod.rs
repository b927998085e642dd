pub mod walrus;
