//! Entry point for the swatch renderer.
//!
//! Builds a document, creates the `div#root` container, mounts the default
//! swatch row under it, and emits the result. The container handle is
//! passed to the driver explicitly; nothing is looked up through ambient
//! state.
//!
//! Usage:
//!   rondel             write the row as HTML to stdout
//!   rondel out.html    write the row as HTML to a file
//!   rondel --frame     write the row as a JSON draw list to stdout

use std::env;
use std::error::Error;

use rondel_dom::{Document, Element};
use rondel_render::{to_html_string, RenderFrame};
use rondel_swatch::{mount, SwatchRow};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("rondel: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let row = SwatchRow::default();
    let mut doc = Document::new();
    let container = doc.insert(Element::new("div").with_html_id(&row.container_id));
    mount(&mut doc, container, &row)?;

    match env::args().nth(1).as_deref() {
        Some("--frame") => {
            let frame = RenderFrame::build(&doc, container);
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Some(path) => {
            std::fs::write(path, to_html_string(&doc, container)?)?;
            log::info!("wrote swatch row to {}", path);
        }
        None => println!("{}", to_html_string(&doc, container)?),
    }
    Ok(())
}
