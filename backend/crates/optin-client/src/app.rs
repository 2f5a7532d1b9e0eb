//! Terminal rendering of the login and profile views.
//!
//! Input and output are injected so the whole session can be driven from a
//! script in tests.

use crate::{
    ClientResult, GatewayClient, IdentityProvider, OptInController, ProfileStores, Shell, View,
};

use optin_core::UserIdentity;

use std::io::Write;

use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

const PROFILE_HEADING: &str = "User Profile";
const OPT_IN_LABEL: &str = "Opt in/out for the email list";
const PROFILE_HELP: &str = "Commands: on, off, toggle, logout, quit";

/// What the shell loop does after a view returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub struct App<P: IdentityProvider> {
    provider: P,
    stores: ProfileStores,
    gateway: GatewayClient,
}

impl<P: IdentityProvider> App<P> {
    pub fn new(provider: P, stores: ProfileStores, gateway: GatewayClient) -> Self {
        Self {
            provider,
            stores,
            gateway,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run until `quit` or end of input
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> ClientResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let shell = Shell::new(self.provider.subscribe());
        let mut lines = input.lines();

        loop {
            let step = match shell.view() {
                View::Login => self.login_view(&mut lines, out).await?,
                View::Profile(identity) => self.profile_view(identity, &mut lines, out).await?,
            };

            if step == Step::Quit {
                return Ok(());
            }
        }
    }

    async fn login_view<R, W>(&self, lines: &mut Lines<R>, out: &mut W) -> ClientResult<Step>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out)?;
        writeln!(out, "Log In")?;

        let Some(email) = prompt(lines, out, "Email: ").await? else {
            return Ok(Step::Quit);
        };
        let Some(password) = prompt(lines, out, "Password: ").await? else {
            return Ok(Step::Quit);
        };

        if let Err(e) = self.provider.sign_in(&email, &password).await {
            writeln!(out, "{}", e.user_message())?;
        }

        Ok(Step::Continue)
    }

    async fn profile_view<R, W>(
        &self,
        identity: UserIdentity,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> ClientResult<Step>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let store = self.stores.for_identity(&identity);
        let mut controller = OptInController::new(identity, store, self.gateway.clone());
        controller.load().await;

        writeln!(out)?;
        writeln!(out, "{}", PROFILE_HEADING)?;
        writeln!(out, "{}", PROFILE_HELP)?;

        loop {
            render_checkbox(out, controller.is_opted_in())?;

            let Some(command) = prompt(lines, out, "> ").await? else {
                return Ok(Step::Quit);
            };

            let new_value = match command.to_lowercase().as_str() {
                "on" => true,
                "off" => false,
                "toggle" => !controller.is_opted_in(),
                "logout" => {
                    self.provider.sign_out();
                    return Ok(Step::Continue);
                }
                "quit" => return Ok(Step::Quit),
                "" => continue,
                _ => {
                    writeln!(out, "{}", PROFILE_HELP)?;
                    continue;
                }
            };

            let outcome = controller.toggle(new_value).await;
            debug!("Toggle outcome: {:?}", outcome);
        }
    }
}

fn render_checkbox<W: Write>(out: &mut W, checked: bool) -> ClientResult<()> {
    let mark = if checked { "x" } else { " " };
    writeln!(out, "[{}] {}", mark, OPT_IN_LABEL)?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
async fn prompt<R, W>(lines: &mut Lines<R>, out: &mut W, label: &str) -> ClientResult<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", label)?;
    out.flush()?;

    let line = lines.next_line().await?;
    Ok(line.map(|l| l.trim().to_string()))
}
