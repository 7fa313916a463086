use chrono::{Local, NaiveDate, Weekday};
use clap::Parser;
use colored::Colorize;
use social::api::{CmdMessage, MessageLevel, SocialApi};
use social::error::{Result, SocialError};
use social::generator::Generator;
use social::model::{Platform, Status};
use social::platforms::PlatformProfile;
use social::render;
use social::store::{default_store_path, ContentStore, EntryUpdate};
use std::io::{self, BufRead, Write};

mod args;
use args::{CalendarCommands, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let store_path = match cli.store {
        Some(path) => path,
        None => default_store_path()?,
    };
    let api = SocialApi::new(ContentStore::new(store_path));

    match cli.command {
        Commands::Generate {
            platform,
            topic,
            schedule,
            extra,
            no_save,
        } => handle_generate(&api, platform, topic, schedule, extra, no_save),
        Commands::Calendar {
            command: Some(CalendarCommands::Add {
                platform,
                content,
                topic,
                schedule,
                status,
            }),
            ..
        } => handle_add(&api, platform, content, topic, schedule, status),
        Commands::Calendar {
            command: None,
            platform,
            status,
            week,
        } => handle_calendar(&api, platform, status, week),
        Commands::Platforms => handle_platforms(&api),
        Commands::Edit {
            entry_id,
            content,
            schedule,
            status,
            regenerate,
            feedback,
        } => handle_edit(&api, entry_id, content, schedule, status, regenerate, feedback),
        Commands::Delete { entry_id, force } => handle_delete(&api, entry_id, force),
    }
}

fn handle_generate(
    api: &SocialApi,
    platform: Platform,
    topic: String,
    schedule: Option<NaiveDate>,
    extra: Option<String>,
    no_save: bool,
) -> Result<()> {
    println!(
        "\n{} {}\n",
        format!("Generating {} content about:", platform).bold(),
        topic
    );

    let generator = Generator::from_env()?;
    let content = generator.generate(&topic, platform, extra.as_deref().unwrap_or(""))?;

    println!("{}\n", "Generated content:".green());
    println!("{}", content);
    println!(
        "\n{}\n",
        format!("({} characters)", content.chars().count()).dimmed()
    );

    if no_save {
        return Ok(());
    }

    let status = if schedule.is_some() {
        Status::Scheduled
    } else {
        Status::Draft
    };
    let result = api.add_entry(platform, content, topic, schedule, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    api: &SocialApi,
    platform: Platform,
    content: String,
    topic: String,
    schedule: Option<NaiveDate>,
    status: Status,
) -> Result<()> {
    let result = api.add_entry(platform, content, topic, schedule, status)?;
    print_messages(&result.messages);
    if let Some(entry) = result.affected_entries.first() {
        print!("{}", render::render_detail(entry));
    }
    Ok(())
}

fn handle_calendar(
    api: &SocialApi,
    platform: Option<Platform>,
    status: Option<Status>,
    week: bool,
) -> Result<()> {
    let result = api.calendar(platform, status)?;
    if result.listed_entries.is_empty() {
        println!("{}", "No content entries found.".dimmed());
        return Ok(());
    }

    if week {
        let start = Local::now().date_naive().week(Weekday::Mon).first_day();
        print!("{}", render::render_week(&result.listed_entries, start));
    } else {
        print!("{}", render::render_table(&result.listed_entries));
    }
    Ok(())
}

fn handle_platforms(api: &SocialApi) -> Result<()> {
    let result = api.platforms();
    print_profiles(&result.profiles);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    api: &SocialApi,
    entry_id: String,
    content: Option<String>,
    schedule: Option<NaiveDate>,
    status: Option<Status>,
    regenerate: bool,
    feedback: Option<String>,
) -> Result<()> {
    let mut content = content;

    if regenerate {
        let entry = api.get_entry(&entry_id)?;
        let generator = Generator::from_env()?;
        let new_content = generator.regenerate(&entry, feedback.as_deref().unwrap_or(""))?;
        println!("{}\n{}\n", "Regenerated:".green(), new_content);
        content = Some(new_content);
    }

    let update = EntryUpdate {
        content,
        scheduled_date: schedule,
        status,
        ..Default::default()
    };

    let result = api.edit_entry(&entry_id, &update)?;
    print_messages(&result.messages);
    if let Some(entry) = result.affected_entries.first() {
        print!("{}", render::render_detail(entry));
    }
    Ok(())
}

fn handle_delete(api: &SocialApi, entry_id: String, force: bool) -> Result<()> {
    let entry = api.get_entry(&entry_id)?;
    print!("{}", render::render_detail(&entry));

    if !force && !confirm("Delete this entry?")? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }

    let result = api.delete_entry(&entry.id)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush().map_err(SocialError::Io)?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(SocialError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_profiles(profiles: &[&PlatformProfile]) {
    println!("{}", "Supported Platforms".bold());
    println!(
        "{:<14}{:>11}  {:<45}{}",
        "Platform", "Max Length", "Tone", "Hashtags"
    );
    for profile in profiles {
        println!(
            "{:<14}{:>11}  {:<45}{}",
            profile.name, profile.max_length, profile.tone, profile.hashtag_style
        );
    }
}
