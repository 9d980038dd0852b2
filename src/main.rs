use anyhow::Result;
use clap::{Parser, Subcommand};
use jot::areas::repository::Repository;
use jot::artifacts::merge::resolver::InteractiveResolver;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A minimal snapshot-based version control system",
    long_about = "jot tracks full-content snapshots of a working directory, \
    organizes them into named branches, and merges divergent branches with \
    interactive conflict resolution.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository")]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage files for the next commit")]
    Add {
        #[arg(required = true, help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(name = "commit", about = "Snapshot the staging area into a commit")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show staged, untracked, and branch state")]
    Status,
    #[command(
        name = "branch",
        about = "Create a branch, or list branches when no name is given"
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(name = "switch", about = "Switch to another branch and restore its files")]
    Switch {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current one, resolving conflicts interactively"
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge from")]
        branch: String,
    },
    #[command(name = "log", about = "Show commit history")]
    Log,
    #[command(name = "graph", about = "Show commits with their branch pointers")]
    Graph,
}

fn repository_at(path: Option<&String>) -> Result<Repository> {
    match path {
        Some(path) => Repository::new(path, Box::new(std::io::stdout())),
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => repository_at(path.as_ref())?.init()?,
        Commands::Add { paths } => repository_at(None)?.add(paths).await?,
        Commands::Commit { message } => {
            repository_at(None)?.commit(message).await?;
        }
        Commands::Status => {
            repository_at(None)?.status().await?;
        }
        Commands::Branch { name: Some(name) } => repository_at(None)?.create_branch(name)?,
        Commands::Branch { name: None } => repository_at(None)?.list_branches()?,
        Commands::Switch { name } => repository_at(None)?.switch_branch(name)?,
        Commands::Merge { branch } => {
            let mut resolver = InteractiveResolver::from_stdin();
            repository_at(None)?.merge(branch, &mut resolver)?;
        }
        Commands::Log => repository_at(None)?.log()?,
        Commands::Graph => repository_at(None)?.graph()?,
    }

    Ok(())
}
