use std::path::PathBuf;

use anyhow::bail;

fn main() -> anyhow::Result<()> {
    laborsim_observability::init();

    let mut args = std::env::args_os().skip(1);
    let Some(scenario_path) = args.next().map(PathBuf::from) else {
        bail!("usage: laborsim <scenario.json> [baseline.json]");
    };
    let baseline_path = args.next().map(PathBuf::from);

    let output = match std::env::var("LABORSIM_FORMAT") {
        Ok(value) => value.parse()?,
        Err(_) => {
            tracing::warn!("LABORSIM_FORMAT not set; printing the summary");
            laborsim_cli::Output::Summary
        }
    };
    let constants_path = std::env::var_os("LABORSIM_CONSTANTS").map(PathBuf::from);

    let rendered = laborsim_cli::run(&laborsim_cli::Invocation {
        scenario_path,
        baseline_path,
        constants_path,
        output,
    })?;
    println!("{rendered}");
    Ok(())
}
