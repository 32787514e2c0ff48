use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use substack_api::types::{Post, Posts};
use substack_api::{ClientConfig, Credentials, SubstackClient};

#[derive(Parser)]
#[command(name = "substack", version, about = "Substack publication API CLI")]
struct Cli {
    /// Publication URL, e.g. https://example.substack.com
    #[arg(short, long, env = "SUBSTACK_PUBLICATION", global = true)]
    publication: Option<String>,
    /// Login email (read from the env file when omitted)
    #[arg(long, env = "SUBSTACK_EMAIL", global = true, default_value = "")]
    email: String,
    /// Login password (read from the env file when omitted)
    #[arg(
        long,
        env = "SUBSTACK_PASSWORD",
        global = true,
        default_value = "",
        hide_env_values = true
    )]
    password: String,
    /// File holding EMAIL= and PASSWORD= lines
    #[arg(long, value_name = "PATH", default_value = ".env", global = true)]
    env_file: PathBuf,
    /// Log requests (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show publication metadata
    Publication,
    /// List publication users (login required)
    Users,
    /// List the latest published posts (login required)
    Posts,
    /// List the latest drafts (login required)
    Drafts,
    /// List the public post feed
    PublicPosts,
    /// List categories
    Categories,
    /// List subscriptions
    Subscriptions,
    /// Create a draft
    CreateDraft {
        /// Draft title
        #[arg(short, long)]
        title: String,
        /// Draft subtitle
        #[arg(short, long)]
        subtitle: Option<String>,
        /// Editor body as a JSON document
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Publish a draft
    Publish {
        /// Draft ID
        draft_id: String,
        /// Email the post to subscribers
        #[arg(long)]
        send: bool,
        /// Share on connected accounts
        #[arg(long)]
        share: bool,
    },
    /// Delete a draft
    DeleteDraft {
        /// Draft ID
        draft_id: String,
    },
}

impl Cli {
    fn publication_url(&self) -> Result<&str> {
        self.publication
            .as_deref()
            .context("publication URL required (--publication or SUBSTACK_PUBLICATION)")
    }

    fn anonymous(&self) -> Result<SubstackClient> {
        Ok(SubstackClient::anonymous(self.publication_url()?)?)
    }

    fn login(&self) -> Result<SubstackClient> {
        let config = ClientConfig::default().env_file(self.env_file.clone());
        let credentials = Credentials::new(&self.email, &self.password);
        SubstackClient::with_config(credentials, self.publication_url()?, config)
            .context("could not log in")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Publication => cmd_publication(&cli.anonymous()?),
        Command::Users => cmd_users(&cli.login()?),
        Command::Posts => print_posts(&cli.login()?.posts()?),
        Command::Drafts => print_posts(&cli.login()?.drafts()?),
        Command::PublicPosts => print_posts(&cli.anonymous()?.public_posts()?),
        Command::Categories => cmd_categories(&cli.anonymous()?),
        Command::Subscriptions => cmd_subscriptions(&cli.anonymous()?),
        Command::CreateDraft {
            title,
            subtitle,
            body,
        } => cmd_create_draft(&cli.login()?, title, subtitle.clone(), body.clone()),
        Command::Publish {
            draft_id,
            send,
            share,
        } => {
            cli.login()?.publish_draft(draft_id, *send, *share)?;
            println!("Published draft {draft_id}.");
            Ok(())
        }
        Command::DeleteDraft { draft_id } => {
            cli.login()?.delete_draft(draft_id)?;
            println!("Deleted draft {draft_id}.");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

// ── publication ──

fn cmd_publication(client: &SubstackClient) -> Result<()> {
    let p = client.publication()?;
    println!("Name:      {}", p.name);
    println!("Subdomain: {}", p.subdomain);
    if let Some(domain) = &p.custom_domain {
        println!("Domain:    {domain}");
    }
    if let Some(from) = &p.email_from_name {
        println!("From:      {from}");
    }
    if let Some(logo) = &p.logo_url {
        println!("Logo:      {logo}");
    }
    Ok(())
}

fn cmd_users(client: &SubstackClient) -> Result<()> {
    let users = client.publication_users()?;
    for u in &users {
        match &u.handle {
            Some(handle) => println!("  [{}] {} (@{handle})", u.id, u.name),
            None => println!("  [{}] {}", u.id, u.name),
        }
    }
    println!("\nTotal: {}", users.len());
    Ok(())
}

fn cmd_categories(client: &SubstackClient) -> Result<()> {
    for c in client.categories()? {
        let marker = if c.active { "" } else { " (inactive)" };
        println!("  [{}] {} /{}{marker}", c.id, c.name, c.slug);
    }
    Ok(())
}

fn cmd_subscriptions(client: &SubstackClient) -> Result<()> {
    let list = client.subscriptions()?;
    for s in &list.subscriptions {
        println!(
            "  [{}] user={} type={} state={}",
            s.id,
            s.user_id,
            s.subscription_type.as_deref().unwrap_or("-"),
            s.membership_state.as_deref().unwrap_or("-"),
        );
    }
    println!("\nTotal: {}", list.subscriptions.len());
    Ok(())
}

// ── posts ──

fn print_posts(page: &Posts) -> Result<()> {
    println!(
        "Showing {} of {} (offset {})\n",
        page.posts.len(),
        page.total,
        page.offset
    );
    for p in &page.posts {
        let title = p
            .title
            .as_deref()
            .or(p.draft_title.as_deref())
            .unwrap_or("(untitled)");
        let date = p.post_date.as_deref().unwrap_or("-");
        let id = p.id.map_or_else(|| "?".to_owned(), |id| id.to_string());
        match &p.stats {
            Some(stats) => println!("  [{id}] {date} {title} ({} views)", stats.views),
            None => println!("  [{id}] {date} {title}"),
        }
    }
    Ok(())
}

// ── drafts ──

fn cmd_create_draft(
    client: &SubstackClient,
    title: &str,
    subtitle: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let mut draft = Post::draft(title);
    draft.draft_subtitle = subtitle;
    draft.draft_body = body;
    let created = client.create_draft(&draft)?;
    match created.id {
        Some(id) => println!("Created draft {id}."),
        None => println!("Draft created."),
    }
    Ok(())
}
