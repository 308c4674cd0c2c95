use anyhow::Context;
use backend::system::SdlBackend;
use demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut system = SdlBackend::new();
    demo::run(&mut system, &DemoConfig::mono()).context("Demo initialization failure")?;
    Ok(())
}
