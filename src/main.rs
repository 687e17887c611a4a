use sitectl::core::cli::CliPaths;
use sitectl::core::context::AppContext;
use sitectl::core::session::Session;
use sitectl::logging::LogTarget;
use sitectl::sites::NginxSites;
use std::io;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let ctx = match AppContext::new_with_paths(paths.config_path, paths.logs_dir) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if ctx.config.loaded_from_file() {
        ctx.logger.info(
            format!("Configuration loaded from {}", ctx.config.path().display()),
            LogTarget::FileOnly,
        );
    } else {
        ctx.logger.info(
            format!("No configuration at {}; using defaults", ctx.config.path().display()),
            LogTarget::FileOnly,
        );
    }
    for (key, _, value) in ctx.config.rows() {
        ctx.logger.info(format!("{key} = {value}"), LogTarget::FileOnly);
    }

    let mut sites = match NginxSites::from_config(&ctx.config)
        .and_then(|sites| sites.check_layout().map(|()| sites))
    {
        Ok(sites) => sites,
        Err(err) => {
            ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
            std::process::exit(1);
        }
    };

    let outcome = Session::new(&mut sites, &ctx.logger).run(io::stdin().lock());

    if let Some(message) = &outcome.message {
        if outcome.is_error() {
            ctx.logger.error(message, LogTarget::ConsoleAndFile);
        } else {
            println!("{message}");
        }
    }
    match &outcome.error {
        Some(err) => ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile),
        None => println!("Bye!"),
    }
    std::process::exit(outcome.exit_code());
}
