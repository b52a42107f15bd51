//! `comptoir` — interactive shell for the comptoir suite.
//!
//! A line-oriented stand-in for the web frontend: the same screens, guards
//! and gates, driven by typed commands instead of clicks. Navigation always
//! flows through the router so every screen entry is guard-checked, and
//! mutations flow through the screens so the admin gates apply.

use std::io::{BufRead, Write as _};
use std::sync::Arc;

use comptoir_client::api::{
    DEFAULT_GATEWAY_URL, HttpChatApi, HttpClientApi, HttpIdentityApi, HttpProductApi, IdentityApi,
};
use comptoir_client::screens::{
    ChatScreen, ClientsScreen, LoginScreen, ProductsScreen, RegisterScreen,
};
use comptoir_client::{AccessPolicy, CredentialStore, Router, Screen, Session};

struct Shell {
    session: Arc<Session>,
    policy: AccessPolicy,
    router: Router,
    login: LoginScreen,
    register: RegisterScreen,
    chat: ChatScreen,
    products: ProductsScreen,
    clients: ClientsScreen,
}

impl Shell {
    fn new(gateway_url: &str) -> Self {
        let identity: Arc<dyn IdentityApi> = Arc::new(HttpIdentityApi::new(gateway_url));
        let session = Arc::new(Session::new(CredentialStore::new(), identity.clone()));
        let policy = AccessPolicy::new(session.clone());

        Self {
            router: Router::new(policy.clone()),
            login: LoginScreen::new(session.clone()),
            register: RegisterScreen::new(identity),
            chat: ChatScreen::new(Arc::new(HttpChatApi::new(gateway_url, session.clone()))),
            products: ProductsScreen::new(
                Arc::new(HttpProductApi::new(gateway_url, session.clone())),
                policy.clone(),
            ),
            clients: ClientsScreen::new(
                Arc::new(HttpClientApi::new(gateway_url, session.clone())),
                policy.clone(),
            ),
            session,
            policy,
        }
    }

    /// Guard-checked navigation; reports a redirect when one happened.
    fn go(&mut self, target: Screen) -> bool {
        let entered = self.router.navigate(target);
        if entered != target {
            println!("→ redirigé vers {}", entered.name());
        }
        entered == target
    }

    async fn dispatch(&mut self, line: &str) -> bool {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return false,
            ["help"] => print_help(),

            ["login", username, password] => {
                if self.login.submit(username, password).await {
                    println!("Connecté en tant que {}", self.policy.user_id());
                    self.go(Screen::Chat);
                } else if let Some(error) = &self.login.error {
                    println!("{error}");
                }
            }
            ["register", username, email, password] => {
                self.register.submit(username, email, password).await;
                if let Some(message) = self.register.success.as_deref() {
                    println!("{message}");
                } else if let Some(error) = &self.register.error {
                    println!("{error}");
                }
            }
            ["logout"] => {
                self.session.logout();
                self.go(Screen::Login);
                println!("Déconnecté");
            }
            ["whoami"] => {
                let roles = self.policy.roles();
                println!(
                    "{} (roles: {})",
                    self.policy.user_id(),
                    roles
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            ["go", name] => match name.parse() {
                Ok(screen) => {
                    self.go(screen);
                    println!("Écran: {}", self.router.current().name());
                }
                Err(()) => println!("Écran inconnu: {name}"),
            },

            ["product", "list"] => {
                if self.go(Screen::Products) {
                    self.products.load().await;
                    report(&self.products.error);
                    for p in &self.products.products {
                        println!(
                            "#{} {} — {:.2} €",
                            p.id.unwrap_or_default(),
                            p.nom,
                            p.prix
                        );
                    }
                }
            }
            ["product", "add", nom, prix] => {
                if self.go(Screen::Products) {
                    match prix.parse() {
                        Ok(prix) => {
                            self.products
                                .save(comptoir_client::api::Product {
                                    id: None,
                                    nom: nom.to_string(),
                                    description: None,
                                    prix,
                                    quantite_stock: None,
                                })
                                .await;
                            report(&self.products.error);
                        }
                        Err(_) => println!("Prix invalide: {prix}"),
                    }
                }
            }
            ["product", "del", id] => {
                if self.go(Screen::Products) {
                    match id.parse() {
                        Ok(id) => {
                            self.products.delete(id).await;
                            report(&self.products.error);
                        }
                        Err(_) => println!("Identifiant invalide: {id}"),
                    }
                }
            }

            ["client", "list"] => {
                if self.go(Screen::Clients) {
                    self.clients.load().await;
                    report(&self.clients.error);
                    for c in &self.clients.clients {
                        println!(
                            "#{} {} {} <{}>",
                            c.id.unwrap_or_default(),
                            c.prenom,
                            c.nom,
                            c.email
                        );
                    }
                }
            }
            ["client", "add", nom, prenom, email] => {
                if self.go(Screen::Clients) {
                    self.clients
                        .save(comptoir_client::api::Client {
                            id: None,
                            nom: nom.to_string(),
                            prenom: prenom.to_string(),
                            email: email.to_string(),
                            telephone: None,
                            adresse: None,
                        })
                        .await;
                    report(&self.clients.error);
                }
            }
            ["client", "del", id] => {
                if self.go(Screen::Clients) {
                    match id.parse() {
                        Ok(id) => {
                            self.clients.delete(id).await;
                            report(&self.clients.error);
                        }
                        Err(_) => println!("Identifiant invalide: {id}"),
                    }
                }
            }

            ["chat", "clear"] | ["clear"] => self.chat.clear(),
            ["chat", rest @ ..] if !rest.is_empty() => {
                if self.go(Screen::Chat) {
                    self.chat.send(&rest.join(" ")).await;
                    if let Some(reply) = self.chat.messages.last() {
                        println!("{}", reply.content);
                    }
                }
            }

            _ => println!("Commande inconnue (tapez `help`)"),
        }
        true
    }
}

fn report(error: &Option<String>) {
    if let Some(message) = error {
        println!("{message}");
    }
}

fn print_help() {
    println!(
        "Commandes:\n  \
         login <user> <pass> | register <user> <email> <pass> | logout | whoami\n  \
         go <login|register|chat|products|clients>\n  \
         product list | product add <nom> <prix> | product del <id>\n  \
         client list | client add <nom> <prenom> <email> | client del <id>\n  \
         chat <message> | clear | quit"
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    comptoir_observability::init();

    let gateway_url = std::env::var("COMPTOIR_GATEWAY_URL")
        .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
    tracing::info!(%gateway_url, "comptoir shell starting");

    let mut shell = Shell::new(&gateway_url);
    if shell.session.is_authenticated() {
        println!("Session restaurée: {}", shell.policy.user_id());
        shell.go(Screen::Chat);
    }

    let stdin = std::io::stdin();
    loop {
        print!("comptoir:{}> ", shell.router.current().name());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !shell.dispatch(line.trim()).await {
            break;
        }
    }

    Ok(())
}
