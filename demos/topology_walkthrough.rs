// Walkthrough of building a diagram and switching connectivity modes.
//
// Builds the default [3, 4, 2] diagram, adds a random layer, prints edge
// counts for each connectivity mode and writes the rendered draw commands
// to draw_commands.json.
//
// To run this example:
//   RUST_LOG=debug cargo run --example topology_walkthrough

use anyhow::Context;
use topoviz::{ConnectivityMode, DrawCommand, TopologyModel, WidgetConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== {} Topology Walkthrough ===\n", topoviz::NAME);

    let config = WidgetConfig::default().with_seed(42);
    let mut model = TopologyModel::from_config(&config);
    model.add_default_layers();

    let added = model.add_random_layer();
    println!("Added random layer with {} neurons", added);
    for line in model.layer_summary() {
        println!("  {}", line);
    }
    println!();

    for mode in ["feedforward", "cascade", "rbf"] {
        model.set_connectivity_mode(mode);
        println!("{:>12}: {} edges", model.connectivity_mode(), model.edges().len());
    }

    model.set_connectivity_mode(ConnectivityMode::Cascade);
    let commands = model.render(800.0, 600.0);
    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    println!(
        "\nRendered {} commands ({} lines, {} circles)",
        commands.len(),
        lines,
        commands.len() - lines
    );

    let json = serde_json::to_string_pretty(&commands)?;
    std::fs::write("draw_commands.json", json).context("writing draw_commands.json")?;
    println!("Draw commands written to draw_commands.json");

    Ok(())
}
