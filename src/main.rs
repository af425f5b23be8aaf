use clap::{Parser, Subcommand};
use log::{debug, info};
use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};

use mood_food::command::{Command, HELP};
use mood_food::config::load_config;
use mood_food::mood::{DIETARY_OPTIONS, MOODS};
use mood_food::{render, RecipeSource, Session, SpoonacularClient, StoreEvent, UserPreferences};

#[derive(Parser)]
#[command(
    name = "mood-food",
    about = "Find recipes that match your mood, your pantry and your diet"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,

    /// Configuration file (defaults to ./config.toml if present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Search once and print the matching recipes
    Search {
        /// How you are feeling (happy, energetic, cozy, stressed, relaxed)
        #[arg(long, default_value = "")]
        mood: String,
        /// Ingredient you have at home; repeat for more
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
        /// Dietary restriction; repeat for more
        #[arg(long = "diet", short = 'd')]
        dietary: Vec<String>,
        /// Number of recipes to request
        #[arg(long)]
        count: Option<u32>,
    },
    /// Show one recipe in full
    Show { id: u64 },
    /// Interactive session with saved recipes (default)
    Shell,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = load_config(cli.config.as_deref())?;
    debug!("Using recipe service at {}", config.base_url);

    match cli.command.unwrap_or(CliCommand::Shell) {
        CliCommand::Search {
            mood,
            ingredients,
            dietary,
            count,
        } => {
            if let Some(count) = count {
                config.result_count = count;
            }
            let preferences = UserPreferences {
                mood,
                ingredients,
                dietary,
            };
            let recipes = mood_food::search_recipes_with_config(&preferences, &config).await?;
            if recipes.is_empty() {
                println!("No recipes found");
            }
            for recipe in &recipes {
                println!("{}", render::card(recipe, false));
            }
        }
        CliCommand::Show { id } => {
            let recipe = mood_food::fetch_recipe_with_config(id, &config).await?;
            println!("{}", render::details(&recipe, false));
        }
        CliCommand::Shell => {
            let client = SpoonacularClient::new(&config)?;
            let session = Session::with_result_count(client, config.result_count);
            run_shell(session).await?;
        }
    }

    Ok(())
}

async fn run_shell<S: RecipeSource>(mut session: Session<S>) -> std::io::Result<()> {
    let last_event = Rc::new(Cell::new(None));
    let sink = Rc::clone(&last_event);
    session
        .store_mut()
        .subscribe(move |event: StoreEvent| sink.set(Some(event)));

    println!("Mood Food. Type 'help' for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Mood(mood) => session.store_mut().set_mood(mood),
            Command::AddIngredient(ingredient) => session.store_mut().add_ingredient(&ingredient),
            Command::DropIngredient(index) => session.store_mut().remove_ingredient(index),
            Command::ToggleDiet(tag) => session.store_mut().toggle_dietary(&tag),
            Command::Preferences => {
                println!("{}", render::preferences(session.store().preferences()))
            }
            Command::Search => {
                session.search().await;
                print_results(&session);
            }
            Command::Show(id) => match session.recipe_details(id).await {
                Some(recipe) => {
                    let saved = session.store().is_saved(recipe.id);
                    println!("{}", render::details(&recipe, saved));
                }
                None => println!("Recipe not found"),
            },
            Command::ToggleSave(id) => {
                if session.toggle_saved(id).is_none() {
                    println!("Recipe {} not found; search or show it first", id);
                }
            }
            Command::Saved => {
                println!("{}", session.saved_summary());
                for recipe in session.store().saved_recipes() {
                    println!("{}", render::card(recipe, true));
                }
            }
            Command::Moods => {
                println!("Moods: {}", MOODS.join(", "));
                println!("Dietary: {}", DIETARY_OPTIONS.join(", "));
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }

        // Re-render whatever the last mutation touched
        match last_event.take() {
            Some(StoreEvent::PreferencesUpdated) => {
                println!("{}", render::preferences(session.store().preferences()))
            }
            Some(StoreEvent::SavedRecipesChanged) => println!("{}", session.saved_summary()),
            None => {}
        }
    }

    info!("Session ended with {} saved recipe(s)", session.store().saved_recipes().len());
    Ok(())
}

fn print_results<S: RecipeSource>(session: &Session<S>) {
    if session.results().is_empty() {
        println!("No recipes found");
        return;
    }
    for recipe in session.results() {
        println!("{}", render::card(recipe, session.store().is_saved(recipe.id)));
    }
}
