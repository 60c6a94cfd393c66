//! The interactive menu: thin I/O glue over [`Registry`].
//!
//! All prompting and type coercion happens here. Every registry error is
//! recoverable; the loop prints it and returns to the menu.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use registrar::{Config, Course, Faculty, Registry, Snapshot, Student};

use super::terminal::Colorize;

const ACTIONS: &[&str] = &[
    "Add student",
    "Add faculty member",
    "Add course",
    "Enroll student in course",
    "Assign faculty to course",
    "View course roster",
    "Export snapshot",
    "Quit",
];

/// Runs the menu loop until the user quits.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut registry = Registry::new();
    let theme = ColorfulTheme::default();

    loop {
        println!();
        println!(
            "{}",
            format!(
                "Students: {}  Faculty: {}  Courses: {}",
                registry.student_count(),
                registry.faculty_count(),
                registry.course_count()
            )
            .dim()
        );

        let action = Select::with_theme(&theme)
            .with_prompt("Academic records")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => add_student(&theme, &mut registry)?,
            1 => add_faculty(&theme, &mut registry)?,
            2 => add_course(&theme, &mut registry)?,
            3 => enroll(&theme, &mut registry)?,
            4 => assign(&theme, &mut registry)?,
            5 => roster(&theme, &registry)?,
            6 => export(config, &registry)?,
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn add_student(theme: &ColorfulTheme, registry: &mut Registry) -> anyhow::Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Student ID")
        .interact_text()?;
    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .interact_text()?;
    let major: String = Input::with_theme(theme)
        .with_prompt("Major")
        .interact_text()?;

    match registry.add_student(Student::new(id, name, major)) {
        Ok(()) => println!("{}", "Student added.".success()),
        Err(err) => println!("{}", err.to_string().warning()),
    }
    Ok(())
}

fn add_faculty(theme: &ColorfulTheme, registry: &mut Registry) -> anyhow::Result<()> {
    let id: String = Input::with_theme(theme)
        .with_prompt("Faculty ID")
        .interact_text()?;
    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .interact_text()?;
    let department: String = Input::with_theme(theme)
        .with_prompt("Department")
        .interact_text()?;

    match registry.add_faculty(Faculty::new(id, name, department)) {
        Ok(()) => println!("{}", "Faculty member added.".success()),
        Err(err) => println!("{}", err.to_string().warning()),
    }
    Ok(())
}

fn add_course(theme: &ColorfulTheme, registry: &mut Registry) -> anyhow::Result<()> {
    let code: String = Input::with_theme(theme)
        .with_prompt("Course code")
        .interact_text()?;
    let title: String = Input::with_theme(theme)
        .with_prompt("Title")
        .interact_text()?;
    let credits: u32 = Input::with_theme(theme)
        .with_prompt("Credits")
        .interact_text()?;

    let prerequisites = if Confirm::with_theme(theme)
        .with_prompt("Any prerequisites?")
        .default(false)
        .interact()?
    {
        let raw: String = Input::with_theme(theme)
            .with_prompt("Prerequisites (comma-separated)")
            .allow_empty(true)
            .interact_text()?;
        raw.split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(ToString::to_string)
            .collect()
    } else {
        Vec::new()
    };

    match registry.add_course(Course::new(code, title, credits, prerequisites)) {
        Ok(()) => println!("{}", "Course added.".success()),
        Err(err) => println!("{}", err.to_string().warning()),
    }
    Ok(())
}

fn enroll(theme: &ColorfulTheme, registry: &mut Registry) -> anyhow::Result<()> {
    let student_id: String = Input::with_theme(theme)
        .with_prompt("Student ID")
        .interact_text()?;
    let course_code: String = Input::with_theme(theme)
        .with_prompt("Course code")
        .interact_text()?;

    match registry.enroll(&student_id, &course_code) {
        Ok(outcome) if outcome.already_enrolled => {
            println!("{}", "Already enrolled.".info());
        }
        Ok(_) => println!("{}", "Enrollment successful.".success()),
        Err(err) => println!("{}", err.to_string().warning()),
    }
    Ok(())
}

fn assign(theme: &ColorfulTheme, registry: &mut Registry) -> anyhow::Result<()> {
    let faculty_id: String = Input::with_theme(theme)
        .with_prompt("Faculty ID")
        .interact_text()?;
    let course_code: String = Input::with_theme(theme)
        .with_prompt("Course code")
        .interact_text()?;

    match registry.assign(&faculty_id, &course_code) {
        Ok(outcome) => {
            println!("{}", "Faculty assigned.".success());
            if let Some(previous) = outcome.replaced {
                // The displaced member's own list still names this course.
                println!(
                    "{}",
                    format!("Displaced {previous}, who still lists this course.").warning()
                );
            }
        }
        Err(err) => println!("{}", err.to_string().warning()),
    }
    Ok(())
}

fn roster(theme: &ColorfulTheme, registry: &Registry) -> anyhow::Result<()> {
    let course_code: String = Input::with_theme(theme)
        .with_prompt("Course code")
        .interact_text()?;

    match registry.roster(&course_code) {
        Ok(roster) => {
            println!("{}", roster.course);
            for entry in &roster.entries {
                match entry.name {
                    Some(name) => println!("  - {name}"),
                    None => println!("  - {} {}", entry.student_id, "(unknown student)".dim()),
                }
            }
        }
        Err(err) => println!("{}", err.to_string().warning()),
    }
    Ok(())
}

fn export(config: &Config, registry: &Registry) -> anyhow::Result<()> {
    let snapshot = Snapshot::from(registry);
    let json = snapshot.to_json(config.pretty_export)?;
    std::fs::write(&config.export_path, json)?;
    println!(
        "{}",
        format!("Snapshot written to {}", config.export_path.display()).success()
    );
    Ok(())
}
