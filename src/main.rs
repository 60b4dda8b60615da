use clap::Parser;
use festperfect::cli::{
    handle_clear, handle_conflicts, handle_contact, handle_import, handle_init, handle_plan,
    handle_priority, handle_share_create, handle_share_show, handle_show, handle_validate,
    handle_wallpaper, Cli, Commands, ShareAction,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "festperfect=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { demo } => handle_init(demo),
        Commands::Import {
            path,
            lineup,
            name,
            date,
        } => handle_import(path, lineup, name, date),
        Commands::Show { json } => handle_show(json),
        Commands::Plan => handle_plan(),
        Commands::Priority { slot, set } => handle_priority(slot, set),
        Commands::Conflicts { json } => handle_conflicts(json),
        Commands::Contact {
            name,
            phone,
            alternate,
        } => handle_contact(name, phone, alternate),
        Commands::Share(share_cmd) => match share_cmd.action {
            ShareAction::Create => handle_share_create(),
            ShareAction::Show { share_id, json } => handle_share_show(share_id, json),
        },
        Commands::Wallpaper {
            device,
            output,
            list,
        } => handle_wallpaper(device, output, list),
        Commands::Validate => handle_validate(),
        Commands::Clear { force } => handle_clear(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
