use env_logger::Env;
use layer_flattener_cli::run;

fn main() -> anyhow::Result<()> {
    // a missing .env file is fine, flags and defaults still apply
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    run()?;

    Ok(())
}
