//! Interactive menu
//!
//! Gathers and validates input with `dialoguer`, then hands structured
//! values to the tools.

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Input, Select};

use super::render::{render_combined, render_intake, render_lookup};
use crate::models::{ActivityLevel, AggregateProfile, SelectedItem, Sex, UserProfile};
use crate::nutrition::{aggregate, TargetCalculator};
use crate::tools::{
    combine_foods, lookup_food, recommended_intake, save_results, ExportFormat, FoodLookup,
    FoodRequest, ResultRow,
};
use crate::usda::FoodSource;

const MENU_ITEMS: [&str; 5] = [
    "Search for a single food item",
    "Search for multiple food items and calculate combined totals",
    "Save results to a file (CSV or JSON)",
    "Enter personal details for recommended daily intake",
    "Exit",
];

/// Results gathered during one run
#[derive(Debug, Default)]
pub struct Session {
    results: Vec<FoodLookup>,
    combined_totals: Option<AggregateProfile>,
}

impl Session {
    pub fn record(&mut self, lookup: FoodLookup) {
        self.results.push(lookup);
    }

    pub fn results(&self) -> &[FoodLookup] {
        &self.results
    }

    pub fn set_combined_totals(&mut self, totals: AggregateProfile) {
        self.combined_totals = Some(totals);
    }

    /// Totals to compare against: the last combined lookup, otherwise every
    /// single lookup so far, otherwise nothing.
    pub fn current_totals(&self) -> Option<AggregateProfile> {
        if let Some(totals) = &self.combined_totals {
            return Some(totals.clone());
        }
        if self.results.is_empty() {
            return None;
        }
        let items: Vec<SelectedItem> = self.results.iter().map(|l| l.item.clone()).collect();
        match aggregate(&items) {
            Ok(totals) => Some(totals),
            Err(e) => {
                tracing::warn!("Could not total session results: {}", e);
                None
            }
        }
    }
}

/// The interactive application
pub struct App<S: FoodSource> {
    source: Option<S>,
    calculator: TargetCalculator,
    session: Session,
}

impl<S: FoodSource> App<S> {
    /// `source` is None when lookups are unavailable (no API key)
    pub fn new(source: Option<S>, calculator: TargetCalculator) -> Self {
        Self {
            source,
            calculator,
            session: Session::default(),
        }
    }

    /// Run the select loop until the user chooses "Exit"
    pub fn run(&mut self) -> Result<()> {
        loop {
            println!("\n--- Nutrition Calculator ---");
            let choice = Select::new().items(&MENU_ITEMS).default(0).interact()?;
            match choice {
                0 => self.single_lookup()?,
                1 => self.combined_lookup()?,
                2 => self.save()?,
                3 => self.intake()?,
                _ => {
                    println!("Exiting the program. Goodbye!");
                    break;
                }
            }
        }
        Ok(())
    }

    fn source(&self) -> Option<&S> {
        if self.source.is_none() {
            println!("Food lookups need an API key. Set USDA_API_KEY (or API_KEY) and restart.");
        }
        self.source.as_ref()
    }

    fn single_lookup(&mut self) -> Result<()> {
        let Some(source) = self.source() else {
            return Ok(());
        };
        let request = prompt_food_request()?;

        match lookup_food(source, &request) {
            Ok(Some(lookup)) => {
                print!("{}", render_lookup(&lookup));
                self.session.record(lookup);
            }
            Ok(None) => println!("Food item not found. Please try again."),
            Err(e) => println!("Lookup failed: {}", e),
        }
        Ok(())
    }

    fn combined_lookup(&mut self) -> Result<()> {
        let Some(source) = self.source() else {
            return Ok(());
        };
        let count: usize = Input::new()
            .with_prompt("How many food items would you like to search?")
            .validate_with(|n: &usize| {
                if (1..=50).contains(n) {
                    Ok(())
                } else {
                    Err("Enter a number between 1 and 50")
                }
            })
            .interact_text()?;

        let mut requests = Vec::with_capacity(count);
        for i in 1..=count {
            println!("Item {} of {}", i, count);
            requests.push(prompt_food_request()?);
        }

        match combine_foods(source, &requests) {
            Ok(combined) => {
                print!("{}", render_combined(&combined));
                self.session.set_combined_totals(combined.totals.clone());
                for item in combined.items {
                    self.session.record(item);
                }
            }
            Err(e) => println!("Could not combine items: {}", e),
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        if self.session.results().is_empty() {
            println!("No results to save. Search for food items first.");
            return Ok(());
        }

        let format_names: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
        let format = ExportFormat::ALL[Select::new()
            .with_prompt("How would you like to save the file?")
            .items(&format_names)
            .default(0)
            .interact()?];
        let name: String = Input::new()
            .with_prompt("Enter the file name (without extension)")
            .validate_with(|s: &String| {
                if s.trim().is_empty() {
                    Err("File name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let rows: Vec<ResultRow> = self.session.results().iter().map(ResultRow::from).collect();
        match save_results(&rows, format, &PathBuf::from(name.trim())) {
            Ok(path) => println!("Results saved to {}", path.display()),
            Err(e) => println!("Error saving file: {}", e),
        }
        Ok(())
    }

    fn intake(&mut self) -> Result<()> {
        let profile = prompt_profile()?;
        let totals = self.session.current_totals();

        match recommended_intake(&self.calculator, &profile, totals.as_ref()) {
            Ok(summary) => print!("{}", render_intake(&summary)),
            Err(e) => println!("Cannot calculate intake: {}", e),
        }
        Ok(())
    }
}

fn positive(value: &f64) -> std::result::Result<(), &'static str> {
    if value.is_finite() && *value > 0.0 {
        Ok(())
    } else {
        Err("Must be a positive number")
    }
}

fn prompt_food_request() -> Result<FoodRequest> {
    let query: String = Input::new()
        .with_prompt("Enter the food item")
        .validate_with(|s: &String| {
            if s.trim().is_empty() {
                Err("Food item cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let quantity: f64 = Input::new()
        .with_prompt("Enter the quantity")
        .validate_with(positive)
        .interact_text()?;
    let unit: String = Input::new()
        .with_prompt("Unit (g, oz, cup, servings, ...)")
        .default("g".to_string())
        .interact_text()?;

    Ok(FoodRequest::new(query.trim(), quantity, unit.trim()))
}

fn prompt_profile() -> Result<UserProfile> {
    let age_years: u32 = Input::new()
        .with_prompt("Enter your age")
        .validate_with(|a: &u32| if *a > 0 { Ok(()) } else { Err("Age must be positive") })
        .interact_text()?;
    let weight_kg: f64 = Input::new()
        .with_prompt("Enter your weight (kg)")
        .validate_with(positive)
        .interact_text()?;
    let height_cm: f64 = Input::new()
        .with_prompt("Enter your height (cm)")
        .validate_with(positive)
        .interact_text()?;

    let sex_names: Vec<&str> = Sex::ALL.iter().map(|s| s.as_str()).collect();
    let sex = Sex::ALL[Select::new()
        .with_prompt("Sex (for the BMR equation)")
        .items(&sex_names)
        .default(0)
        .interact()?];

    let level_names: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|l| format!("{} - {}", l.as_str(), l.description()))
        .collect();
    let activity_level = ActivityLevel::ALL[Select::new()
        .with_prompt("Activity level")
        .items(&level_names)
        .default(0)
        .interact()?];

    Ok(UserProfile {
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_level,
    })
}
