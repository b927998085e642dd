pub mod sui_networks;
