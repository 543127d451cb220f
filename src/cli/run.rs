use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, Commands};
use crate::domain::{Contact, ContactStore, SortDirection, SortField};
use crate::errors::AppError;

/// Menu commands, one per line of the interactive prompt.
pub enum Command {
    First,
    Last,
    ListContacts,
    AddContact,
    SortContacts,
    Exit,
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let mut store = if cli.no_seed {
        ContactStore::new()
    } else {
        ContactStore::seeded()
    };

    match cli.command {
        Some(command) => run_command(&mut store, command),
        None => run_menu(&mut store),
    }
}

fn run_command(store: &mut ContactStore, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::First => {
            println!("{}", store.first()?.display_line());
            Ok(())
        }

        Commands::Last => {
            println!("{}", store.last()?.display_line());
            Ok(())
        }

        Commands::List {
            sort,
            direction,
            json,
        } => {
            if let Some(field) = sort {
                store.sort_by(field, direction);
            }

            if json {
                let listing = serde_json::to_string_pretty(store.all())
                    .map_err(|e| AppError::Io(io::Error::new(io::ErrorKind::Other, e)))?;
                println!("{}", listing);
                return Ok(());
            }

            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            print_contacts(store.all());
            Ok(())
        }

        Commands::Add { name, phone, email } => {
            let added = store.add(&name, &phone, &email)?;

            println!("Contact added successfully");
            println!("{}", added.display_line());
            Ok(())
        }

        Commands::Sort { by, direction } => {
            store.sort_by(by, direction);
            print_contacts(store.all());
            Ok(())
        }
    }
}

fn print_contacts(contacts: &[Contact]) {
    for (mut i, c) in contacts.iter().enumerate() {
        i += 1;
        println!("{i:>3}. {:<20} {:15} {:^30}", c.name, c.phone, c.email);
    }
}

// MENU DRIVER

pub fn show_menu() {
    println!();
    println!("Display the first contact (first)");
    println!("Display the last contact (last)");
    println!("Display all contacts (all)");
    println!("Add a new contact (new)");
    println!("Sort contacts (sort)");
    println!("Exit the program (quit)");
    print!("> ");
    let _ = io::stdout().flush();
}

pub fn get_command(action: &str) -> Result<Command, AppError> {
    match action {
        "first" => Ok(Command::First),
        "last" => Ok(Command::Last),
        "all" => Ok(Command::ListContacts),
        "new" => Ok(Command::AddContact),
        "sort" => Ok(Command::SortContacts),
        "quit" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

/// Read one trimmed line; None on end of input.
fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn prompt(message: &str) -> Result<Option<String>, AppError> {
    println!("{}", message);
    print!("> ");
    io::stdout().flush()?;
    get_input()
}

fn run_menu(store: &mut ContactStore) -> Result<(), AppError> {
    println!("\n--- Contact Book ---");

    'outerloop: loop {
        show_menu();

        let action = match get_input()? {
            Some(input) => input,
            None => break 'outerloop, // end of input
        };

        let command = match get_command(&action) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue 'outerloop;
            }
        };

        match command {
            Command::First => match store.first() {
                Ok(contact) => println!("{}", contact.display_line()),
                Err(e) => eprintln!("{}", e),
            },

            Command::Last => match store.last() {
                Ok(contact) => println!("{}", contact.display_line()),
                Err(e) => eprintln!("{}", e),
            },

            Command::ListContacts => {
                if store.is_empty() {
                    println!("No contact in contact list!");
                    continue 'outerloop;
                }

                for contact in store.all() {
                    println!("{}", contact.display_line());
                }
            }

            Command::AddContact => {
                let Some(name) = prompt("Insert new contact name:")? else {
                    break 'outerloop;
                };
                let Some(phone) = prompt("Insert new contact phone:")? else {
                    break 'outerloop;
                };
                let Some(email) = prompt("Insert new contact email:")? else {
                    break 'outerloop;
                };

                match store.add(&name, &phone, &email) {
                    Ok(added) => {
                        println!("Contact added successfully");
                        println!("{}", added.display_line());
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }

            Command::SortContacts => {
                let Some(field) = prompt("Sort by which field (name / phone / email):")? else {
                    break 'outerloop;
                };

                let field: SortField = match field.parse() {
                    Ok(field) => field,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue 'outerloop;
                    }
                };

                let Some(direction) = prompt("Direction (asc / desc):")? else {
                    break 'outerloop;
                };

                let direction: SortDirection = match direction.parse() {
                    Ok(direction) => direction,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue 'outerloop;
                    }
                };

                store.sort_by(field, direction);

                for contact in store.all() {
                    println!("{}", contact.display_line());
                }
            }

            Command::Exit => {
                println!("\nBye!");
                break 'outerloop;
            }
        }
    }

    Ok(())
}
