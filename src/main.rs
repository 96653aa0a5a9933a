use clap::Parser;
use std::path::Path;

use nutri_menu_rs::cli::{Cli, Command};
use nutri_menu_rs::error::Result;
use nutri_menu_rs::interface::{
    display_food_table, display_menu, prompt_budget_limit, prompt_delete_selection,
    prompt_gl_limit, prompt_new_food, prompt_yes_no, resolve_food_name,
};
use nutri_menu_rs::optimizer::optimize_menu;
use nutri_menu_rs::state::{export_csv, import_csv, load_catalog, save_catalog, FoodCatalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Optimize { gl_limit, budget } => cmd_optimize(&cli.file, gl_limit, budget),
        Command::Add => cmd_add(&cli.file),
        Command::Remove { names } => cmd_remove(&cli.file, &names),
        Command::List => cmd_list(&cli.file),
        Command::Init { force } => cmd_init(&cli.file, force),
        Command::Export { path } => cmd_export(&cli.file, &path),
        Command::Import { path } => cmd_import(&cli.file, &path),
    }
}

/// Optimize the menu under the given (or prompted) limits.
fn cmd_optimize(file_path: &str, gl_limit: Option<f64>, budget: Option<u32>) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Run 'init' to create a starter catalog.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;

    if catalog.is_empty() {
        println!("Catalog is empty. Use 'add' to enter food items first.");
        return Ok(());
    }

    println!("Loaded {} foods", catalog.len());
    display_food_table(catalog.foods());

    let gl_limit = match gl_limit {
        Some(v) => v,
        None => prompt_gl_limit()?,
    };
    let budget = match budget {
        Some(v) => v,
        None => prompt_budget_limit()?,
    };

    println!();
    println!("Optimizing for GL limit {} and budget {}...", gl_limit, budget);

    let menu = optimize_menu(catalog.foods(), gl_limit, budget)?;
    display_menu(&menu, catalog.foods(), gl_limit, budget);

    Ok(())
}

/// Add one food item interactively.
fn cmd_add(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    let mut catalog = if path.exists() {
        load_catalog(path)?
    } else {
        FoodCatalog::new(Vec::new())
    };

    let food = prompt_new_food()?;
    let name = food.name.clone();
    let replacing = catalog.get_food(&name).is_some();

    catalog.add_food(food)?;

    if replacing {
        println!("Replaced: {}", name);
    } else {
        println!("Added: {}", name);
    }

    save_catalog(path, &catalog)?;
    println!("Catalog saved ({} foods).", catalog.len());

    Ok(())
}

/// Remove foods by name, with fuzzy resolution, or via a picker.
fn cmd_remove(file_path: &str, names: &[String]) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        return Ok(());
    }

    let mut catalog = load_catalog(path)?;

    if catalog.is_empty() {
        println!("Catalog is empty; nothing to remove.");
        return Ok(());
    }

    let to_remove = if names.is_empty() {
        prompt_delete_selection(&catalog.names())?
    } else {
        let catalog_names = catalog.names();
        let mut resolved = Vec::new();
        for name in names {
            match resolve_food_name(&catalog_names, name)? {
                Some(n) => resolved.push(n),
                None => println!("No matching food for '{}'", name),
            }
        }
        resolved
    };

    if to_remove.is_empty() {
        println!("Nothing removed.");
        return Ok(());
    }

    let mut removed_count = 0;
    for name in &to_remove {
        match catalog.remove_food(name) {
            Ok(food) => {
                println!("Removed: {}", food.name);
                removed_count += 1;
            }
            Err(_) => println!("Already gone: {}", name),
        }
    }

    if removed_count > 0 {
        save_catalog(path, &catalog)?;
        println!("Catalog saved ({} foods).", catalog.len());
    }

    Ok(())
}

/// List the catalog.
fn cmd_list(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Run 'init' to create a starter catalog.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    println!("Catalog: {} ({} foods)", file_path, catalog.len());
    display_food_table(catalog.foods());

    Ok(())
}

/// Write the starter catalog.
fn cmd_init(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        let overwrite = prompt_yes_no(
            "Catalog file exists. Overwrite with the starter catalog?",
            false,
        )?;
        if !overwrite {
            println!("Left existing catalog untouched.");
            return Ok(());
        }
    }

    let catalog = FoodCatalog::starter();
    save_catalog(path, &catalog)?;
    println!(
        "Wrote starter catalog with {} foods to {}",
        catalog.len(),
        file_path
    );

    Ok(())
}

/// Export the catalog to CSV.
fn cmd_export(file_path: &str, csv_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    export_csv(csv_path, catalog.foods())?;
    println!("Exported {} foods to {}", catalog.len(), csv_path);

    Ok(())
}

/// Import a catalog from CSV, replacing the JSON state file.
fn cmd_import(file_path: &str, csv_path: &str) -> Result<()> {
    if !Path::new(csv_path).exists() {
        eprintln!("CSV file not found: {}", csv_path);
        return Ok(());
    }

    let catalog = import_csv(csv_path)?;

    if Path::new(file_path).exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Replace catalog {} with {} imported foods?",
                file_path,
                catalog.len()
            ),
            true,
        )?;
        if !overwrite {
            println!("Import cancelled.");
            return Ok(());
        }
    }

    save_catalog(file_path, &catalog)?;
    println!("Imported {} foods into {}", catalog.len(), file_path);

    Ok(())
}
