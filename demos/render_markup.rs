use response_raw_viewer::render::backends::markup::MarkupBackend;
use response_raw_viewer::render::ContentAction;
use response_raw_viewer::{ResponseRawViewer, ResponseValue, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ViewerConfig::builder().wrap_text(true).build()?;
    let mut viewer = ResponseRawViewer::new(config);
    viewer.add_content_action(ContentAction::button("Copy", Some("Copy content to clipboard")));

    let mut backend = MarkupBackend::new();

    // Nothing set yet: placeholder and hidden action bar
    viewer.render(&mut backend)?;
    println!("{}", backend.output());

    // Plain text with markup in it
    viewer.set_response_text("<html>\n  <body>Hello</body>\n</html>");
    viewer.render(&mut backend)?;
    println!("{}", backend.output());

    // A body stored as a buffer record in a saved workspace
    let stored = r#"{"type":"Buffer","data":[123,34,111,107,34,58,116,114,117,101,125]}"#;
    viewer.set_response_text(ResponseValue::from_json_str(stored)?);
    viewer.render(&mut backend)?;
    println!("{}", backend.output());

    Ok(())
}
