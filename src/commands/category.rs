use crate::db::categories::Categories;
use crate::libs::category::{Category, CategoryUpdate};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Display color (hex), e.g. #3B82F6
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List all categories with their task counts
    List,
    /// Edit a category
    Edit {
        /// Category name or ID to edit
        category: String,
    },
    /// Delete a category; its tasks become uncategorized
    Delete {
        /// Category name or ID to delete
        category: String,
    },
}

pub fn cmd(args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::Create { name, color }) => handle_create(name, color),
        Some(CategoryCommand::List) => handle_list(),
        Some(CategoryCommand::Edit { category }) => handle_edit(category),
        Some(CategoryCommand::Delete { category }) => handle_delete(category),
        None => handle_interactive(),
    }
}

/// Finds a category by id first, then by unique name.
fn resolve(categories_db: &mut Categories, identifier: &str) -> Result<Option<Category>> {
    if let Some(category) = categories_db.get_by_id(identifier)? {
        return Ok(Some(category));
    }
    categories_db.get_by_name(identifier)
}

fn handle_create(name: String, color: Option<String>) -> Result<()> {
    let mut categories_db = Categories::new()?;

    // Friendlier duplicate handling than the raw constraint violation
    if categories_db.get_by_name(&name)?.is_some() {
        msg_error!(Message::CategoryAlreadyExists(name));
        return Ok(());
    }

    categories_db.create(&name, color.as_deref())?;
    msg_success!(Message::CategoryCreated(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let mut categories_db = Categories::new()?;
    let categories = categories_db.get_all()?;

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoryListHeader, true);
    View::categories(&categories);
    Ok(())
}

fn handle_edit(identifier: String) -> Result<()> {
    let mut categories_db = Categories::new()?;

    let category = match resolve(&mut categories_db, &identifier)? {
        Some(c) => c,
        None => {
            msg_error!(Message::CategoryNotFound(identifier));
            return Ok(());
        }
    };

    msg_print!(Message::EditingCategory(category.name.clone()), true);

    let new_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategoryName.to_string())
        .default(category.name.clone())
        .interact_text()?;

    let new_color: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptCategoryColor.to_string())
        .default(category.color.clone())
        .interact_text()?;

    let update = CategoryUpdate {
        name: (new_name != category.name).then_some(new_name.clone()),
        color: (new_color != category.color).then_some(new_color),
    };

    if update.name.is_none() && update.color.is_none() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    categories_db.update(&category.id, &update)?;
    msg_success!(Message::CategoryUpdated(new_name));
    Ok(())
}

fn handle_delete(identifier: String) -> Result<()> {
    let mut categories_db = Categories::new()?;

    let category = match resolve(&mut categories_db, &identifier)? {
        Some(c) => c,
        None => {
            msg_error!(Message::CategoryNotFound(identifier));
            return Ok(());
        }
    };

    let prompt = if category.task_count > 0 {
        Message::ConfirmDeleteCategoryWithTasks(category.name.clone(), category.task_count)
    } else {
        Message::ConfirmDeleteCategory(category.name.clone())
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    if confirmed {
        categories_db.delete(&category.id)?;
        msg_success!(Message::CategoryDeleted(category.name));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create category", "List categories", "Edit category", "Delete category"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectCategoryAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCategoryName.to_string())
                .interact_text()?;
            let color: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCategoryColor.to_string())
                .allow_empty(true)
                .interact_text()?;
            handle_create(name, if color.is_empty() { None } else { Some(color) })
        }
        1 => handle_list(),
        2 => select_and_then(Message::SelectCategoryToEdit, handle_edit),
        3 => select_and_then(Message::SelectCategoryToDelete, handle_delete),
        _ => Ok(()),
    }
}

fn select_and_then(prompt: Message, action: fn(String) -> Result<()>) -> Result<()> {
    let mut categories_db = Categories::new()?;
    let categories = categories_db.get_all()?;
    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }
    drop(categories_db);

    let names: Vec<String> = categories.iter().map(|c| c.name.clone()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&names)
        .interact()?;
    action(names[selection].clone())
}
