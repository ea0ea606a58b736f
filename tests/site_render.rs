use std::fs;

use tempfile::TempDir;

use movielog::{
    movie::MovieRecord,
    site::{self, SiteError, SiteSettings, PLACEHOLDER_IMAGE},
};

fn rec(title: &str, poster_url: &str) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        year: 1999,
        rating: 8.7,
        poster_url: poster_url.to_string(),
    }
}

#[test]
fn poster_falls_back_unless_remote_or_existing() {
    let tmp = TempDir::new().expect("tmp");
    let local = tmp.path().join("poster.png");
    fs::write(&local, b"png").expect("write poster");
    let local = local.to_string_lossy().to_string();

    assert_eq!(site::poster_src(""), PLACEHOLDER_IMAGE);
    assert_eq!(site::poster_src("N/A"), PLACEHOLDER_IMAGE);
    assert_eq!(site::poster_src("/no/such/file.png"), PLACEHOLDER_IMAGE);
    assert_eq!(
        site::poster_src("https://example.com/a.jpg"),
        "https://example.com/a.jpg"
    );
    assert_eq!(site::poster_src("http://example.com/a.jpg"), "http://example.com/a.jpg");
    assert_eq!(site::poster_src(&local), local);
}

#[test]
fn grid_has_one_item_per_movie_with_escaped_text() {
    let records = [
        rec("The Matrix", "https://example.com/m.jpg"),
        rec("Tom & Jerry <Live>", ""),
    ];
    let grid = site::render_grid(records.iter());

    assert_eq!(grid.matches("<li class=\"movie-item\">").count(), 2);
    assert!(grid.contains("src=\"https://example.com/m.jpg\" alt=\"The Matrix\""));
    assert!(grid.contains("<h3>Tom &amp; Jerry &lt;Live&gt;</h3>"));
    assert!(grid.contains(&format!("src=\"{PLACEHOLDER_IMAGE}\"")));
    assert!(grid.contains("<p>1999</p>"));
    assert!(grid.contains("<p>8.7</p>"));
}

#[test]
fn page_substitutes_both_placeholders() {
    let template = "<title>__TEMPLATE_TITLE__</title><ol>__TEMPLATE_MOVIE_GRID__</ol>";
    let page = site::render_page(template, "My Movie App", [rec("Heat", "")].iter());

    assert!(page.starts_with("<title>My Movie App</title><ol><li class=\"movie-item\">"));
    assert!(!page.contains("__TEMPLATE_"));
}

#[test]
fn generate_writes_page_to_output_path() {
    let tmp = TempDir::new().expect("tmp");
    let template_path = tmp.path().join("index_template.html");
    fs::write(
        &template_path,
        include_str!("../static/index_template.html"),
    )
    .expect("write template");
    let settings = SiteSettings {
        template_path,
        output_path: tmp.path().join("movies.html"),
        page_title: "Weekend Picks".to_string(),
    };

    let written = site::generate(&settings, &[rec("Heat", "")]).expect("generate");
    let html = fs::read_to_string(written).expect("read page");
    assert!(html.contains("<h1>Weekend Picks</h1>"));
    assert!(html.contains("<h3>Heat</h3>"));
}

#[test]
fn missing_template_reports_its_path() {
    let tmp = TempDir::new().expect("tmp");
    let settings = SiteSettings {
        template_path: tmp.path().join("missing.html"),
        output_path: tmp.path().join("movies.html"),
        page_title: "x".to_string(),
    };

    let err = site::generate(&settings, &[]).expect_err("no template");
    assert!(matches!(err, SiteError::ReadTemplate { .. }));
    assert!(err.to_string().contains("missing.html"));
    assert!(!settings.output_path.exists());
}

#[test]
fn whole_ratings_keep_one_decimal() {
    let mut record = rec("Heat", "");
    record.rating = 9.0;
    let grid = site::render_grid([record].iter());

    assert!(grid.contains("<p>9.0</p>"));
    assert!(!grid.contains("<p>9</p>"));
}
