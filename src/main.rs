use wisp::Simulation;

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = Simulation::new().run() {
        tracing::error!("swarm exited with error: {e}");
        std::process::exit(1);
    }
}
