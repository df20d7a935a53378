//! Declares a small web service architecture programmatically and renders
//! it to `web_service.png` in the current directory.
//!
//! Run with: cargo run --example web_service

use cumulus::{CumulusError, Direction, EdgeStyle, GraphBuilder, Renderer};
use cumulus_core::{color::Color, draw::Category};

fn main() -> Result<(), CumulusError> {
    let mut builder = GraphBuilder::new("Web Service")
        .with_direction(Direction::LeftRight)
        .with_output_path("web_service.png");

    let users = builder.node("Users", Category::Client)?;

    let mut gateway = None;
    let mut handlers = Vec::new();
    builder.cluster("API", |b| {
        gateway = Some(b.node("Gateway", Category::Gateway)?);
        handlers.push(b.node("Orders", Category::Function)?);
        handlers.push(b.node("Billing", Category::Function)?);
        Ok(())
    })?;

    let mut db = None;
    let mut queue = None;
    builder.cluster("Backing Services", |b| {
        db = Some(b.node("Postgres", Category::Database)?);
        queue = Some(b.node("Jobs", Category::Queue)?);
        Ok(())
    })?;

    let gateway = gateway.expect("declared above");
    let purple = Color::new("purple").expect("valid CSS color");

    builder.edge(users, gateway, EdgeStyle::new().with_label("HTTPS"))?;
    builder.edge(gateway, handlers.clone(), EdgeStyle::new())?;
    builder.edge(handlers.clone(), db.unwrap(), EdgeStyle::new().with_color(purple))?;
    builder.edge(
        handlers,
        queue.unwrap(),
        EdgeStyle::new()
            .with_color(Color::new("gray").expect("valid CSS color"))
            .with_label("enqueue"),
    )?;

    let graph = builder.finish()?;
    let rendered = Renderer::default().render(&graph)?;
    println!("diagram written to {}", rendered.path().display());
    Ok(())
}
