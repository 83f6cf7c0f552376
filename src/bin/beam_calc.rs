//! Beam Calc - build, analyse and report a beam file
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug beam-calc girder.txt --origin declared-wins
//! beam-calc girder.txt --plan > girder.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use beam_modeler::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OriginArg {
    Union,
    DeclaredWins,
    PinWins,
}

impl From<OriginArg> for OriginRestraint {
    fn from(arg: OriginArg) -> Self {
        match arg {
            OriginArg::Union => OriginRestraint::Union,
            OriginArg::DeclaredWins => OriginRestraint::DeclaredWins,
            OriginArg::PinWins => OriginRestraint::PinWins,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderingArg {
    Ascending,
    Declaration,
}

impl From<OrderingArg> for NodeOrdering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Ascending => NodeOrdering::Ascending,
            OrderingArg::Declaration => NodeOrdering::Declaration,
        }
    }
}

/// Build a beam model from a beam file and report its support reactions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the beam file
    #[arg(value_name = "BEAM_FILE")]
    beam_file: PathBuf,

    /// Id of the registered material
    #[arg(long, default_value = beam_modeler::beam::DEFAULT_MATERIAL_ID)]
    material_id: String,

    /// Restraint policy at node N0
    #[arg(long, value_enum, default_value_t = OriginArg::DeclaredWins)]
    origin: OriginArg,

    /// Order of interior support nodes
    #[arg(long, value_enum, default_value_t = OrderingArg::Declaration)]
    ordering: OrderingArg,

    /// Print the registration plan as JSON instead of analysing
    #[arg(long)]
    plan: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = BuildOptions::default()
        .with_material_id(&args.material_id)
        .with_origin_restraint(args.origin.into())
        .with_node_ordering(args.ordering.into());
    let builder = BeamModelBuilder::with_options(options);

    let beam = load_beam_description(&args.beam_file)
        .with_context(|| format!("failed to parse {}", args.beam_file.display()))?;

    if args.plan {
        let plan = builder.plan(&beam)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let mut model: FEModel = builder.build(&beam)?;
    model.analyze_linear().context("analysis failed")?;
    info!("Analysed '{}'", beam.name);

    let mut supported: Vec<&String> = model.supports.keys().collect();
    supported.sort();

    println!("Beam: {} (L = {})", beam.name, beam.length());
    for combo in model.combo_names() {
        println!();
        println!("{}", combo);
        println!(
            "{:<6} {:>14} {:>14} {:>14} {:>14} {:>14} {:>14}",
            "Node", "FX", "FY", "FZ", "MX", "MY", "MZ"
        );
        for node in &supported {
            let r = model.node_reactions(node, &combo)?;
            println!(
                "{:<6} {:>14.4} {:>14.4} {:>14.4} {:>14.4} {:>14.4} {:>14.4}",
                node, r.fx, r.fy, r.fz, r.mx, r.my, r.mz
            );
        }
    }

    Ok(())
}
