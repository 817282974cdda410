use std::io::{self, BufRead, Write};

use clap::Subcommand;
use url::Url;
use uuid::Uuid;

use client::error::StoreError;
use client::view::{filter_credentials, group_by_category};
use client::{CredentialStore, connect::auto_connect};
use data::{Credential, NewCredential};

const MASKED_PASSWORD: &str = "••••••••";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new credential
    Add {
        url: String,
        username: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Replace a stored credential
    Update {
        id: Uuid,
        url: String,
        username: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a credential
    Remove {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List credentials grouped by category
    List {
        /// Case-insensitive substring match on url or username
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        show_passwords: bool,
    },
    /// Show a single credential, password included
    Show { id: Uuid },
    /// Submit the stored username/password to the stored URL
    Connect { id: Uuid },
}

pub async fn run(command: Command, store: &dyn CredentialStore) -> Result<(), StoreError> {
    match command {
        Command::Add {
            url,
            username,
            password,
            category,
        } => {
            let password = read_password(password)?;
            store
                .save(NewCredential {
                    url,
                    username,
                    password,
                    category,
                })
                .await?;
            println!("Credential saved successfully");
        }
        Command::Update {
            id,
            url,
            username,
            password,
            category,
        } => {
            let password = read_password(password)?;
            store
                .update(
                    id,
                    NewCredential {
                        url,
                        username,
                        password,
                        category,
                    },
                )
                .await?;
            println!("Credential updated successfully");
        }
        Command::Remove { id, yes } => {
            if !yes && !confirm(&format!("Delete credential {id}? [y/N] "))? {
                println!("Aborted");
                return Ok(());
            }
            store.delete(id).await?;
            println!("Credential deleted successfully");
        }
        Command::List {
            search,
            show_passwords,
        } => {
            let credentials = store.list().await?;
            print!("{}", render_list(&credentials, search.as_deref(), show_passwords));
        }
        Command::Show { id } => {
            let credential = find(store, id).await?;
            println!("id:         {}", credential.id);
            println!("url:        {}", credential.url);
            println!("username:   {}", credential.username);
            println!("password:   {}", credential.password);
            println!("category:   {}", credential.category_label());
            println!("created at: {}", credential.created_at);
        }
        Command::Connect { id } => {
            let credential = find(store, id).await?;
            let status = auto_connect(&reqwest::Client::new(), &credential).await?;
            println!("POST {} -> {status}", credential.url);
        }
    }
    Ok(())
}

pub fn report(err: &StoreError) {
    match err {
        StoreError::Validation(errors) => {
            eprintln!("Invalid credential data:");
            for error in &errors.errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
        }
        err => eprintln!("error: {err}"),
    }
}

async fn find(store: &dyn CredentialStore, id: Uuid) -> Result<Credential, StoreError> {
    store
        .list()
        .await?
        .into_iter()
        .find(|credential| credential.id == id)
        .ok_or(StoreError::NotFound)
}

fn read_password(password: Option<String>) -> Result<String, StoreError> {
    match password {
        Some(password) => Ok(password),
        None => Ok(rpassword::prompt_password("Password: ")?),
    }
}

fn confirm(prompt: &str) -> Result<bool, StoreError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn render_list(credentials: &[Credential], search: Option<&str>, show_passwords: bool) -> String {
    let filtered = match search {
        Some(search) => filter_credentials(credentials, search),
        None => credentials.iter().collect(),
    };

    if filtered.is_empty() {
        return "No credentials found\n".to_string();
    }

    let mut out = String::new();
    for (category, group) in group_by_category(filtered) {
        out.push_str(&format!("{category} ({})\n", group.len()));
        for credential in group {
            out.push_str(&format!(
                "  {}  {}  {}  {}\n",
                credential.id,
                display_host(&credential.url),
                credential.username,
                password_display(&credential.password, show_passwords),
            ));
        }
    }
    out
}

fn display_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

fn password_display(password: &str, show: bool) -> &str {
    if show { password } else { MASKED_PASSWORD }
}
