//! Command-line front end
//!
//! Parses arguments with clap, runs the matching handler from
//! [`crate::commands`] and prints the result.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{DashboardStats, FilterCriteria};
use crate::commands::products::ProductInput;
use crate::commands::{auth, dashboard, enquiries, products, services, users};
use crate::export::{CsvStyle, EXPORT_DATE_FORMAT};
use crate::models::{ApiMessage, Enquiry, EnquiryForm, Product, Service, UserProfile, PRODUCT_CATEGORIES};
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Catalog and enquiry administration client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides CATALOG_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Local state database (overrides CATALOG_DB_PATH)
    #[arg(long = "db", global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in, sign up, sign out, profile
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Browse and manage the product catalog
    Products {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// Browse and manage company services
    Services {
        #[command(subcommand)]
        command: ServiceCommand,
    },

    /// Review and export contact enquiries (admin)
    Enquiries {
        #[command(subcommand)]
        command: EnquiryCommand,
    },

    /// Submit the public contact form
    Contact(ContactArgs),

    /// Show the admin dashboard summary
    Dashboard,

    /// Manage user accounts (admin)
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show or edit the signed-in user's profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// One of the fixed product categories
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

impl From<ProductArgs> for ProductInput {
    fn from(args: ProductArgs) -> Self {
        ProductInput {
            name: args.name,
            category: args.category,
            brand: args.brand,
            description: args.description,
            image: args.image,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    List {
        /// Free-text search over name, description, brand and category
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        brand: Option<String>,
        /// Also print the available category and brand filters
        #[arg(long)]
        options: bool,
    },
    Show {
        id: String,
    },
    Add(ProductArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: ProductArgs,
    },
    Delete {
        id: String,
    },
    /// List the fixed product categories
    Categories,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommand {
    List {
        /// Use the admin listing
        #[arg(long)]
        admin: bool,
        #[arg(long)]
        search: Option<String>,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum EnquiryCommand {
    List {
        /// Search by name, email or phone
        #[arg(long)]
        search: Option<String>,
    },
    /// Write the (filtered) enquiries to enquiries.csv
    Export {
        /// Directory to write into
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
        #[arg(long)]
        search: Option<String>,
        /// RFC 4180 quoting instead of the legacy comma substitution
        #[arg(long)]
        quoted: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    List,
    Delete { id: String },
}

fn criteria_from(
    search: Option<String>,
    category: Option<String>,
    brand: Option<String>,
) -> FilterCriteria {
    FilterCriteria {
        term: search,
        category,
        brand,
    }
}

/// Whether `command` is a sign-in, where a 401 means rejected credentials
/// rather than an expired session
pub fn is_sign_in(command: &Command) -> bool {
    matches!(
        command,
        Command::Auth {
            command: AuthCommand::Signin { .. }
        }
    )
}

/// Exit code and message to print for a finished command.
///
/// `expired_route` is set when the backend rejected the stored credential
/// during the run.
pub fn outcome(
    result: Result<(), String>,
    sign_in: bool,
    expired_route: Option<String>,
) -> (i32, Option<String>) {
    if let Some(route) = expired_route.filter(|_| !sign_in) {
        return (
            2,
            Some(format!(
                "Your session has expired. Sign in again ({}): catalog auth signin --email <EMAIL> --password <PASSWORD>",
                route
            )),
        );
    }

    match result {
        Ok(()) => (0, None),
        Err(message) => (1, Some(format!("Error: {}", message))),
    }
}

/// Run one parsed command against `state`
pub async fn dispatch(state: &AppState, command: Command) -> Result<(), String> {
    match command {
        Command::Auth { command } => run_auth(state, command).await,
        Command::Products { command } => run_products(state, command).await,
        Command::Services { command } => run_services(state, command).await,
        Command::Enquiries { command } => run_enquiries(state, command).await,
        Command::Contact(args) => {
            let form = EnquiryForm {
                name: args.name,
                email: args.email,
                phone_number: args.phone,
                subject: args.subject,
                message: args.message,
            };
            let ack = enquiries::enquiry_submit(state, form).await?;
            print_ack(&ack, "Enquiry sent");
            Ok(())
        }
        Command::Dashboard => {
            let stats = dashboard::dashboard_summary(state).await?;
            print_dashboard(&stats);
            Ok(())
        }
        Command::Users { command } => match command {
            UserCommand::List => {
                for user in users::user_list(state).await? {
                    print_user(&user);
                }
                Ok(())
            }
            UserCommand::Delete { id } => {
                let ack = users::user_delete(state, id).await?;
                print_ack(&ack, "User deleted");
                Ok(())
            }
        },
    }
}

async fn run_auth(state: &AppState, command: AuthCommand) -> Result<(), String> {
    match command {
        AuthCommand::Signin { email, password } => {
            let response = auth::auth_signin(state, email, password).await?;
            match response.user {
                Some(user) => println!("Signed in as {}", user.display_name()),
                None => println!("Signed in"),
            }
        }
        AuthCommand::Signup {
            name,
            email,
            password,
        } => {
            let response = auth::auth_signup(state, name, email, password).await?;
            println!(
                "{}",
                response
                    .message
                    .unwrap_or_else(|| "Account created, sign in to continue".to_string())
            );
        }
        AuthCommand::Logout => {
            auth::auth_logout(state).await?;
            println!("Signed out");
        }
        AuthCommand::Whoami => {
            let user = auth::auth_whoami(state).await?;
            print_user(&user);
        }
        AuthCommand::Profile { name, email } => {
            let user = auth::auth_profile(state, name, email).await?;
            print_user(&user);
        }
    }
    Ok(())
}

async fn run_products(state: &AppState, command: ProductCommand) -> Result<(), String> {
    match command {
        ProductCommand::List {
            search,
            category,
            brand,
            options,
        } => {
            let listing =
                products::product_list(state, criteria_from(search, category, brand)).await?;

            for product in &listing.products {
                print_product(product);
            }
            println!("{} of {} products", listing.products.len(), listing.total);

            if options {
                println!("Categories: {}", listing.categories.join(", "));
                println!("Brands: {}", listing.brands.join(", "));
            }
        }
        ProductCommand::Show { id } => {
            let product = products::product_get(state, id).await?;
            print_product(&product);
            if let Some(description) = product.description.as_deref() {
                println!("  {}", description);
            }
        }
        ProductCommand::Add(fields) => {
            let ack = products::product_create(state, fields.into()).await?;
            print_ack(&ack, "Product created");
        }
        ProductCommand::Update { id, fields } => {
            let ack = products::product_update(state, id, fields.into()).await?;
            print_ack(&ack, "Product updated");
        }
        ProductCommand::Delete { id } => {
            let ack = products::product_delete(state, id).await?;
            print_ack(&ack, "Product deleted");
        }
        ProductCommand::Categories => {
            for category in PRODUCT_CATEGORIES {
                println!("{}", category);
            }
        }
    }
    Ok(())
}

async fn run_services(state: &AppState, command: ServiceCommand) -> Result<(), String> {
    match command {
        ServiceCommand::List { admin, search } => {
            for service in services::service_list(state, admin, search).await? {
                print_service(&service);
            }
        }
        ServiceCommand::Add {
            name,
            description,
            price,
        } => {
            let ack = services::service_add(state, name, description, price).await?;
            print_ack(&ack, "Service added");
        }
        ServiceCommand::Update {
            id,
            name,
            description,
            price,
        } => {
            let ack = services::service_update(state, id, name, description, price).await?;
            print_ack(&ack, "Service updated");
        }
        ServiceCommand::Delete { id } => {
            let ack = services::service_delete(state, id).await?;
            print_ack(&ack, "Service deleted");
        }
    }
    Ok(())
}

async fn run_enquiries(state: &AppState, command: EnquiryCommand) -> Result<(), String> {
    match command {
        EnquiryCommand::List { search } => {
            let list = enquiries::enquiry_list(state, search).await?;
            for enquiry in &list {
                print_enquiry(enquiry);
            }
            println!("{} enquiries", list.len());
        }
        EnquiryCommand::Export {
            dir,
            search,
            quoted,
        } => {
            let style = if quoted { CsvStyle::Quoted } else { CsvStyle::Legacy };
            let (path, count) = enquiries::enquiry_export(state, dir, search, style).await?;
            println!("Exported {} enquiries to {}", count, path.display());
        }
    }
    Ok(())
}

fn print_ack(ack: &ApiMessage, fallback: &str) {
    println!("{}", ack.message.as_deref().unwrap_or(fallback));
}

fn print_product(product: &Product) {
    println!(
        "{}  {}  [{}]  {}",
        product.id,
        product.product_name.as_deref().unwrap_or("-"),
        product.category.as_deref().unwrap_or("-"),
        product.brand.as_deref().unwrap_or("-"),
    );
}

fn print_service(service: &Service) {
    println!(
        "{}  {}  {}",
        service.id,
        service.service_name.as_deref().unwrap_or("-"),
        service.price.as_deref().unwrap_or("-"),
    );
}

fn print_enquiry(enquiry: &Enquiry) {
    let date = enquiry
        .created_at
        .map(|at| at.format(EXPORT_DATE_FORMAT).to_string())
        .unwrap_or_default();

    println!(
        "{}  {}  {}  {}  {}",
        date,
        enquiry.name.as_deref().unwrap_or("-"),
        enquiry.email.as_deref().unwrap_or("-"),
        enquiry.phone_number.as_deref().unwrap_or("-"),
        enquiry.subject.as_deref().unwrap_or(""),
    );
}

fn print_user(user: &UserProfile) {
    println!(
        "{}  {}  {}{}",
        user.id,
        user.display_name(),
        user.email.as_deref().unwrap_or("-"),
        if user.is_admin { "  (admin)" } else { "" },
    );
}

fn print_dashboard(stats: &DashboardStats) {
    println!("Total enquiries:   {}", stats.total_enquiries);
    println!("Today's enquiries: {}", stats.today_enquiries);
    println!("Total products:    {}", stats.total_products);
    println!("Categories:        {}", stats.active_categories);

    if !stats.recent_enquiries.is_empty() {
        println!();
        println!("Recent enquiries:");
        for enquiry in &stats.recent_enquiries {
            print_enquiry(enquiry);
        }
    }
}
