use crate::ConfigCommands;

use super::*;

pub(super) fn handle_config_command(ctx: CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = &ctx.config;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(cfg).context("serialize config json")?
                );
            } else {
                println!("file: {}", ctx.config_path.display());
                println!("url: {}", cfg.base_url);
                println!("reconcile: {:?}", cfg.reconcile);
                println!("gestures: {:?}", cfg.gestures);
                println!("download dir: {}", cfg.download_dir().display());
            }
        }
        ConfigCommands::Set {
            url,
            reconcile,
            gestures,
            download_dir,
        } => {
            let mut cfg = ctx.config;
            if let Some(url) = url {
                cfg.base_url = url;
            }
            if let Some(reconcile) = reconcile {
                cfg.reconcile = reconcile.into();
            }
            if let Some(gestures) = gestures {
                cfg.gestures = gestures.into();
            }
            if download_dir.is_some() {
                cfg.download_dir = download_dir;
            }
            // Fail here rather than on the next connect.
            RemoteClient::new(&cfg)?;
            cfg.save(&ctx.config_path)?;
            println!("Saved {}", ctx.config_path.display());
        }
    }
    Ok(())
}
