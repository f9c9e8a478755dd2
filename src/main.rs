use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use roster::cli::{parse_args, CliCommand};
use roster::directory::DirectoryClient;
use roster::models::User;
use roster::store::FavoritesStore;
use roster::view_state::{FavoritesViewModel, ListViewModel, NO_FAVORITES_MESSAGE};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("roster: {message}");
            eprintln!("usage: roster [--favorites | --toggle <id> | --remove <id> | --version]");
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => println!("roster {VERSION}"),
        CliCommand::List => run_list().await?,
        CliCommand::Favorites => run_favorites().await?,
        CliCommand::Toggle(id) => run_toggle(id).await?,
        CliCommand::Remove(id) => run_remove(id).await?,
    }

    Ok(())
}

/// Build the directory client, honoring the `ROSTER_BASE_URL` override.
fn directory_client() -> DirectoryClient {
    match std::env::var("ROSTER_BASE_URL") {
        Ok(base) if !base.is_empty() => DirectoryClient::with_base_url(base),
        _ => DirectoryClient::new(),
    }
}

fn open_store() -> Result<FavoritesStore> {
    FavoritesStore::new().ok_or_else(|| eyre!("could not determine the home directory"))
}

async fn run_list() -> Result<()> {
    let mut view = ListViewModel::new(directory_client(), open_store()?);
    view.activate().await;
    display_list(&view);
    Ok(())
}

async fn run_favorites() -> Result<()> {
    let mut view = FavoritesViewModel::new(open_store()?);
    view.activate().await;
    display_favorites(&view);
    Ok(())
}

async fn run_toggle(id: i64) -> Result<()> {
    let mut view = ListViewModel::new(directory_client(), open_store()?);
    view.activate().await;

    let user = view
        .rows()
        .iter()
        .find(|row| row.user.id == id)
        .map(|row| row.user.clone());

    let Some(user) = user else {
        eprintln!("user {id} is not on the current page");
        display_list(&view);
        return Ok(());
    };

    if view.toggle(&user).await? {
        println!("Added {} to favorites.", user.full_name());
    } else {
        println!("Removed {} from favorites.", user.full_name());
    }
    display_list(&view);
    Ok(())
}

async fn run_remove(id: i64) -> Result<()> {
    let mut view = FavoritesViewModel::new(open_store()?);
    view.activate().await;

    if view.remove(id).await? {
        println!("Removed user {id} from favorites.");
    } else {
        println!("User {id} is not in the favorites.");
    }
    display_favorites(&view);
    Ok(())
}

/// Print the list view: one row per user, favorites marked.
fn display_list(view: &ListViewModel) {
    let rows = view.rows();
    if rows.is_empty() {
        println!("No users available.");
        return;
    }

    for row in rows {
        let marker = if row.is_favorite { "*" } else { " " };
        print_user_row(marker, row.user);
    }
}

/// Print the favorites view, or its empty-state message.
fn display_favorites(view: &FavoritesViewModel) {
    if view.is_empty() {
        println!("{NO_FAVORITES_MESSAGE}");
        return;
    }

    for user in view.rows() {
        print_user_row("*", user);
    }
}

fn print_user_row(marker: &str, user: &User) {
    println!(
        "{} {:>4}  {:<24} {}",
        marker,
        user.id,
        user.full_name(),
        user.email
    );
}
