use askama::Template;

use super::tiles::{BOARD_SIZE, Tile, TileLayout};

/// Values the upload form starts with.
#[derive(Debug, Clone)]
pub struct FormDefaults {
    pub publisher_url: String,
    pub aggregator_url: String,
    pub epochs: u32,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub board_size: f64,
    pub tiles: &'a [Tile],
    pub form: &'a FormDefaults,
    pub alert: Option<&'a str>,
}

/// Renders the whole page. `alert` is shown only when present.
pub fn render_page(
    layout: &TileLayout,
    form: &FormDefaults,
    alert: Option<&str>,
) -> askama::Result<String> {
    IndexTemplate {
        board_size: BOARD_SIZE,
        tiles: &layout.tiles,
        form,
        alert,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::entities::upload_records::UploadRecord;
    use rand::{SeedableRng, rngs::StdRng};

    fn defaults() -> FormDefaults {
        FormDefaults {
            publisher_url: "https://pub.example".to_string(),
            aggregator_url: "https://agg.example".to_string(),
            epochs: 1,
        }
    }

    fn record(blob_id: &str, is_image: bool) -> UploadRecord {
        UploadRecord {
            blob_id: blob_id.to_string(),
            status: None,
            end_epoch: None,
            sui_ref_type: None,
            sui_ref: None,
            download_url: format!("https://agg.example/v1/{}", blob_id),
            explorer_url: String::new(),
            is_image,
            media_type: None,
        }
    }

    #[test]
    fn renders_form_with_defaults_and_hidden_alert() {
        let layout = TileLayout::generate(&mut StdRng::seed_from_u64(1), &[]);

        let html = render_page(&layout, &defaults(), None).unwrap();

        assert!(html.contains(r#"name="basePublisherUrl" type="url" value="https://pub.example""#));
        assert!(html.contains(r#"name="baseAggregatorUrl" type="url" value="https://agg.example""#));
        assert!(html.contains(r#"name="numEpochs" type="number" value="1" min="1""#));
        assert!(html.contains(r#"class="alert hidden""#));
        assert_eq!(html.matches(r#"<div class="tile""#).count(), 17);
    }

    #[test]
    fn renders_images_and_ids_for_records() {
        let records = vec![record("pic", true), record("doc", false)];
        let layout = TileLayout::generate(&mut StdRng::seed_from_u64(2), &records);

        let html = render_page(&layout, &defaults(), None).unwrap();

        assert!(html.contains(r#"<img src="https://agg.example/v1/pic" alt="pic">"#));
        assert!(html.contains(r#"<a href="https://agg.example/v1/doc">doc</a>"#));
    }

    #[test]
    fn escapes_alert_and_record_text() {
        let records = vec![record("<script>", false)];
        let layout = TileLayout::generate(&mut StdRng::seed_from_u64(3), &records);

        let html = render_page(&layout, &defaults(), Some("bad <thing> happened")).unwrap();

        assert!(html.contains(r#"<div id="alert" class="alert" role="alert">bad &lt;thing&gt; happened</div>"#));
        assert!(html.contains(">&lt;script&gt;</a>"));
    }

    #[test]
    fn escapes_quotes_in_form_defaults() {
        let layout = TileLayout::generate(&mut StdRng::seed_from_u64(4), &[]);
        let form = FormDefaults {
            publisher_url: r#"https://pub.example/?a=1&b="x""#.to_string(),
            ..defaults()
        };

        let html = render_page(&layout, &form, None).unwrap();

        assert!(html.contains(r#"value="https://pub.example/?a=1&amp;b=&quot;x&quot;""#));
    }
}
