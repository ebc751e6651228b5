use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use bgpsimulator::as_graph::AsGraph;
use bgpsimulator::error::BgpSimError;
use bgpsimulator::io;

/// Simulate BGP-style interdomain route propagation across an AS topology.
#[derive(Parser)]
#[command(name = "bgpsimulator", about = "BGP-style route propagation simulator")]
struct Cli {
    /// First CAIDA-style relationships file.
    relationships_a: PathBuf,
    /// Second CAIDA-style relationships file, loaded after the first (union of edges).
    relationships_b: PathBuf,
    /// Seed announcements CSV (seed_asn,prefix,rov_invalid).
    announcements: PathBuf,
    /// ROV ASN list, one ASN per line.
    rov_asns: PathBuf,
    /// Output RIB CSV path.
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BgpSimError> {
    let mut graph = AsGraph::new();

    io::relationships::load(&mut graph, &cli.relationships_a)?;
    io::relationships::load(&mut graph, &cli.relationships_b)?;

    if graph.detect_cycles() {
        return Err(BgpSimError::Cycle);
    }
    graph.compute_ranks();

    io::rov::load(&mut graph, &cli.rov_asns)?;

    io::seed::load(&mut graph, &cli.announcements)?;
    graph.process_all_received();

    graph.run_to_convergence();

    io::rib_writer::write(&graph, &cli.output)?;
    Ok(())
}
