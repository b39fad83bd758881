//! Bloglist Administration CLI
//!
//! Maintenance commands that work directly against the configured record
//! store: create accounts, inspect both collections, seed sample data and
//! clear everything.

use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;

use bloglist_service::{
    config::AppConfig,
    database::StoreConnection,
    models::{CreateBlogRequest, CreateUserRequest},
    service::{BlogService, UserService},
};

/// Bloglist administration CLI
#[derive(Parser)]
#[command(name = "bloglist-admin", about = "Bloglist administration CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser(CreateUserArgs),
    /// List all users
    ListUsers,
    /// List all blogs
    ListBlogs,
    /// Insert the sample blogs
    SeedBlogs,
    /// Delete every blog and user
    Reset(ResetArgs),
}

#[derive(Args)]
struct CreateUserArgs {
    /// Login name, unique across users
    #[arg(short, long)]
    username: String,

    /// Display name
    #[arg(short, long)]
    name: Option<String>,

    /// Plaintext password, hashed before it is stored
    #[arg(short, long)]
    password: String,
}

#[derive(Args)]
struct ResetArgs {
    /// Skip the safety check
    #[arg(long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    config.validate()?;
    let connection = StoreConnection::open(&config.database).await?;

    let blog_service = BlogService::new(connection.blogs());
    let user_service = UserService::new(connection.users());

    let result = match cli.command {
        Commands::CreateUser(args) => create_user(&user_service, args).await,
        Commands::ListUsers => list_users(&user_service).await,
        Commands::ListBlogs => list_blogs(&blog_service).await,
        Commands::SeedBlogs => seed_blogs(&blog_service).await,
        Commands::Reset(args) => reset(&blog_service, &user_service, args).await,
    };

    connection.shutdown().await;
    result
}

async fn create_user(
    service: &UserService,
    args: CreateUserArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = CreateUserRequest {
        username: Some(args.username),
        name: args.name,
        password: Some(args.password),
    };

    let user = service.create_user(request).await?;

    println!("Created user:");
    println!("   ID: {}", user.id);
    println!("   Username: {}", user.username);
    if let Some(name) = &user.name {
        println!("   Name: {}", name);
    }

    Ok(())
}

async fn list_users(service: &UserService) -> Result<(), Box<dyn std::error::Error>> {
    let users = service.list_users().await?;

    if users.is_empty() {
        println!("No users found.");
        println!("Create one with: bloglist-admin create-user --username root --password <secret>");
        return Ok(());
    }

    println!("{:<26} {:<20} {:<30}", "ID", "Username", "Name");
    println!("{}", "-".repeat(76));
    for user in users {
        println!(
            "{:<26} {:<20} {:<30}",
            user.id,
            truncate_string(&user.username, 19),
            truncate_string(user.name.as_deref().unwrap_or("-"), 29)
        );
    }

    Ok(())
}

async fn list_blogs(service: &BlogService) -> Result<(), Box<dyn std::error::Error>> {
    let blogs = service.list_blogs().await?;

    if blogs.is_empty() {
        println!("No blogs found.");
        return Ok(());
    }

    println!("{:<26} {:<40} {:<24} {:>6}", "ID", "Title", "Author", "Likes");
    println!("{}", "-".repeat(99));
    for blog in blogs {
        println!(
            "{:<26} {:<40} {:<24} {:>6}",
            blog.id,
            truncate_string(&blog.title, 39),
            truncate_string(blog.author.as_deref().unwrap_or("-"), 23),
            blog.likes
        );
    }

    Ok(())
}

async fn seed_blogs(service: &BlogService) -> Result<(), Box<dyn std::error::Error>> {
    for request in sample_blogs() {
        let blog = service.create_blog(request).await?;
        println!("Seeded '{}' ({})", blog.title, blog.id);
    }

    Ok(())
}

async fn reset(
    blog_service: &BlogService,
    user_service: &UserService,
    args: ResetArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes {
        println!("This deletes every blog and user. Re-run with --yes to continue.");
        return Ok(());
    }

    let blogs = blog_service.delete_all_blogs().await?;
    let users = user_service.delete_all_users().await?;
    println!("Deleted {} blogs and {} users", blogs, users);

    Ok(())
}

fn sample_blogs() -> Vec<CreateBlogRequest> {
    vec![
        CreateBlogRequest {
            title: Some("React patterns".to_string()),
            author: Some("Michael Chan".to_string()),
            url: Some("https://reactpatterns.com/".to_string()),
            likes: Some(7),
        },
        CreateBlogRequest {
            title: Some("Go To Statement Considered Harmful".to_string()),
            author: Some("Edsger W. Dijkstra".to_string()),
            url: Some(
                "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html"
                    .to_string(),
            ),
            likes: Some(5),
        },
    ]
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
