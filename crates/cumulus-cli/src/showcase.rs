//! The bundled architecture declaration.
//!
//! The graph is fixed at build time; each run recompiles the same
//! declaration into an image. Output path and format can be overridden by
//! the thin CLI wrapper.

use cumulus::{CumulusError, Direction, EdgeStyle, Graph, GraphBuilder, OutputFormat};
use cumulus_core::{
    color::Color,
    draw::{Category, StrokeStyle},
};

fn css(name: &str) -> Color {
    Color::new(name).expect("showcase colors are valid CSS colors")
}

/// Declares the course seat tracker architecture.
pub fn declare(
    output_override: Option<&str>,
    format_override: Option<OutputFormat>,
) -> Result<Graph, CumulusError> {
    let mut b = GraphBuilder::new("Course Seat Tracker - System Architecture")
        .with_direction(Direction::LeftRight)
        .with_format(format_override.unwrap_or_default())
        .with_output_path(output_override.unwrap_or("architecture_diagram.png"));

    // Far left: the students using the system.
    let users = b.node("Students", Category::Client)?;

    let mut webapp = None;
    let mut cdn = None;
    b.cluster("Frontend Layer", |b| {
        webapp = Some(b.node("Web App", Category::Service)?);
        cdn = Some(b.node("CDN", Category::Gateway)?);
        Ok(())
    })?;
    let webapp = webapp.expect("declared above");
    let cdn = cdn.expect("declared above");

    let mut auth = None;
    b.cluster("Authentication", |b| {
        auth = Some(b.node("OAuth Provider", Category::Service)?);
        Ok(())
    })?;
    let auth = auth.expect("declared above");

    let mut api_gw = None;
    let mut api_subs = None;
    let mut api_courses = None;
    let mut api_unsub = None;
    b.cluster("API Layer", |b| {
        api_gw = Some(b.node("API Gateway", Category::Gateway)?);

        b.cluster("API Functions", |b| {
            api_subs = Some(b.node("Subscriptions", Category::Function)?);
            api_courses = Some(b.node("Courses", Category::Function)?);
            api_unsub = Some(b.node("Unsubscribe", Category::Function)?);
            Ok(())
        })?;
        Ok(())
    })?;
    let api_gw = api_gw.expect("declared above");
    let api_subs = api_subs.expect("declared above");
    let api_courses = api_courses.expect("declared above");
    let api_unsub = api_unsub.expect("declared above");

    let mut state = None;
    b.cluster("Data Layer", |b| {
        state = Some(b.node("State Table", Category::Database)?);
        Ok(())
    })?;
    let state = state.expect("declared above");

    let mut bus = None;
    let mut poller = None;
    let mut notifier = None;
    let mut feedback = None;
    b.cluster("Event Processing", |b| {
        bus = Some(b.node("Event Bus", Category::Queue)?);

        b.cluster("Background Workers", |b| {
            poller = Some(b.node("Poller\n(1min schedule)", Category::Function)?);
            notifier = Some(b.node("Notifier", Category::Function)?);
            feedback = Some(b.node("Mail Feedback", Category::Function)?);
            Ok(())
        })?;
        Ok(())
    })?;
    let bus = bus.expect("declared above");
    let poller = poller.expect("declared above");
    let notifier = notifier.expect("declared above");
    let feedback = feedback.expect("declared above");

    let mut enrollment = None;
    b.cluster("External APIs", |b| {
        enrollment = Some(b.node("Enrollment API", Category::Service)?);
        Ok(())
    })?;
    let enrollment = enrollment.expect("declared above");

    let mut mailer = None;
    b.cluster("Email Service", |b| {
        mailer = Some(b.node("Mail Gateway", Category::Service)?);
        Ok(())
    })?;
    let mailer = mailer.expect("declared above");

    let mut metrics = None;
    let mut dashboards = None;
    let mut dlq_poller = None;
    let mut dlq_notifier = None;
    b.cluster("Observability", |b| {
        metrics = Some(b.node("Metrics + Logs", Category::Service)?);
        dashboards = Some(b.node("Dashboards", Category::Service)?);

        b.cluster("DLQs", |b| {
            dlq_poller = Some(b.node("Poller DLQ", Category::Queue)?);
            dlq_notifier = Some(b.node("Notifier DLQ", Category::Queue)?);
            Ok(())
        })?;
        Ok(())
    })?;
    let metrics = metrics.expect("declared above");
    let dashboards = dashboards.expect("declared above");
    let dlq_poller = dlq_poller.expect("declared above");
    let dlq_notifier = dlq_notifier.expect("declared above");

    // Users reach the frontend through the CDN.
    b.edge(users, cdn, EdgeStyle::new().with_color(css("darkblue")))?;
    b.edge(webapp, cdn, EdgeStyle::new().with_color(css("gray")))?;

    // Frontend to auth and API.
    b.edge(
        webapp,
        auth,
        EdgeStyle::new()
            .with_color(css("darkgreen"))
            .with_label("authenticate"),
    )?;
    b.edge(
        webapp,
        api_gw,
        EdgeStyle::new()
            .with_color(css("darkblue"))
            .with_label("API + JWT"),
    )?;

    // Gateway to authorizer and handler functions.
    b.edge(
        api_gw,
        auth,
        EdgeStyle::new()
            .with_color(css("darkgreen"))
            .with_line_style(StrokeStyle::Dashed),
    )?;
    b.edge(
        api_gw,
        vec![api_subs, api_courses, api_unsub],
        EdgeStyle::new().with_color(css("darkblue")),
    )?;

    // API functions to the state table.
    b.edge(
        vec![api_subs, api_courses, api_unsub],
        state,
        EdgeStyle::new().with_color(css("purple")),
    )?;

    // Poller flow.
    b.edge(
        poller,
        enrollment,
        EdgeStyle::new().with_color(css("darkorange")).with_label("poll"),
    )?;
    b.edge(
        poller,
        state,
        EdgeStyle::new()
            .with_color(css("purple"))
            .with_label("read/write state"),
    )?;
    b.edge(
        poller,
        bus,
        EdgeStyle::new()
            .with_color(css("firebrick"))
            .with_label("seat change"),
    )?;
    b.edge(
        poller,
        dlq_poller,
        EdgeStyle::new()
            .with_color(css("red"))
            .with_line_style(StrokeStyle::Dashed)
            .with_label("failures"),
    )?;

    // Notifier flow.
    b.edge(
        bus,
        notifier,
        EdgeStyle::new()
            .with_color(css("firebrick"))
            .with_label("trigger"),
    )?;
    b.edge(
        notifier,
        state,
        EdgeStyle::new().with_color(css("purple")).with_label("query"),
    )?;
    b.edge(
        notifier,
        mailer,
        EdgeStyle::new().with_color(css("green")).with_label("send"),
    )?;
    b.edge(
        notifier,
        dlq_notifier,
        EdgeStyle::new()
            .with_color(css("red"))
            .with_line_style(StrokeStyle::Dashed)
            .with_label("failures"),
    )?;

    // Delivery back to the users.
    b.edge(
        mailer,
        users,
        EdgeStyle::new()
            .with_color(css("darkgreen"))
            .with_label("deliver email")
            .bold(),
    )?;

    // Bounce/complaint feedback loop.
    b.edge(
        mailer,
        bus,
        EdgeStyle::new()
            .with_color(css("orange"))
            .with_line_style(StrokeStyle::Dotted)
            .with_label("bounce/complaint"),
    )?;
    b.edge(bus, feedback, EdgeStyle::new().with_color(css("orange")))?;
    b.edge(
        feedback,
        state,
        EdgeStyle::new().with_color(css("purple")).with_label("suppress"),
    )?;

    // Monitoring.
    b.edge(
        vec![api_subs, poller, notifier],
        metrics,
        EdgeStyle::new()
            .with_color(css("gray"))
            .with_line_style(StrokeStyle::Dotted),
    )?;
    b.edge(metrics, dashboards, EdgeStyle::new().with_color(css("gray")))?;
    b.edge(
        vec![dlq_poller, dlq_notifier],
        metrics,
        EdgeStyle::new()
            .with_color(css("gray"))
            .with_line_style(StrokeStyle::Dotted),
    )?;

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_declares_cleanly() {
        let graph = declare(None, None).unwrap();

        assert!(graph.nodes_count() > 10);
        assert!(graph.clusters_count() >= 9);
        assert!(!graph.edges().is_empty());
        assert_eq!(graph.direction(), Direction::LeftRight);
        assert_eq!(graph.format(), OutputFormat::Png);
    }

    #[test]
    fn test_overrides_apply() {
        let graph = declare(Some("out/custom.svg"), Some(OutputFormat::Svg)).unwrap();
        assert_eq!(graph.output_path().to_str(), Some("out/custom.svg"));
        assert_eq!(graph.format(), OutputFormat::Svg);
    }

    #[test]
    fn test_set_edges_expanded() {
        let graph = declare(None, None).unwrap();

        // The gateway fans out to three API functions, each of which also
        // writes to the state table.
        let fanout = graph
            .edges()
            .iter()
            .filter(|e| e.source() == "API Layer::API Gateway")
            .count();
        assert!(fanout >= 3);
    }
}
