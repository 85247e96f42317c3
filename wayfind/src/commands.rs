//! The `search` and `generate` subcommands.

use std::error::Error;
use std::fs;
use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind_loader::{TextLoader, write_problem};
use wayfind_paths::{GraphGen, Orchestrator, Renderer, Summary};
use wayfind_render::{JsonRenderer, Plotter, TextRenderer};

use crate::cli::{Format, GenerateArgs, SearchArgs};
use crate::config::Settings;

pub fn search(args: &SearchArgs, settings: &Settings) -> Result<Summary, Box<dyn Error>> {
    let orchestrator = Orchestrator::new(settings.algorithms())
        .with_heuristic(settings.heuristic)
        .with_goal_mode(settings.goal_mode);
    let loader = TextLoader::new(&args.file).directed(settings.directed);
    log::debug!(
        "searching {} with {:?}",
        loader.path().display(),
        orchestrator.algorithms()
    );

    let stdout = io::stdout();
    let out = stdout.lock();
    let mut renderer: Box<dyn Renderer> = match settings.format {
        Format::Text => {
            let plotter = settings
                .plot
                .then(|| Plotter::new(settings.plot_width, settings.plot_height));
            Box::new(
                TextRenderer::new(out)
                    .with_plot(plotter)
                    .with_color(settings.use_color()),
            )
        }
        Format::Json => Box::new(JsonRenderer::new(out)),
    };
    let summary = orchestrator.run_from(&loader, &mut *renderer)?;
    Ok(summary)
}

pub fn generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("generating with seed {seed}");
    let problem = GraphGen::new(StdRng::seed_from_u64(seed))
        .with_area(args.width, args.height)
        .with_degree(args.degree)
        .problem(args.nodes, args.destinations)?;
    log::info!(
        "generated {} nodes and {} edges",
        problem.graph.node_count(),
        problem.graph.edge_count()
    );

    let text = write_problem(&problem);
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            log::info!("wrote {}", path.display());
        }
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    Ok(())
}
