// ──────────────────────────────────────────────────────────────────────────────
// burnbox-mail · client
// ──────────────────────────────────────────────────────────────────────────────
// HTTP client for the TempMail+ disposable-mailbox service covering:
//  • Address minting (TempMail+ accepts any local part on its domains,
//    so provisioning is a client-side pick)
//  • Inbox listing (`/api/mails`) with the provider's result envelope
//  • Message-body hydration (`/api/mails/{id}`), newest messages only
// ──────────────────────────────────────────────────────────────────────────────

use crate::mail::types::{MailError, MailMessage, Mailbox};
use log::{debug, warn};
use rand::Rng;
use reqwest::{header, Client};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://tempmail.plus/api";

/// Domains TempMail+ serves; any of them works for a minted address.
const DOMAINS: &[&str] = &["rover.info", "mailto.in.ua", "mailbox.in.ua", "fextemp.com"];

/// Only hydrate bodies for the newest few messages to keep a refresh fast.
const HYDRATE_LIMIT: usize = 10;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Wire shapes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `/api/mails` response envelope.
#[derive(Debug, Deserialize)]
struct MailListEnvelope {
    #[serde(default)]
    result: bool,
    #[serde(default)]
    mail_list: Vec<MailSummary>,
}

/// One listing row. Field names drift between provider versions, hence
/// the aliases and the permissive id type.
#[derive(Debug, Deserialize)]
struct MailSummary {
    #[serde(default, alias = "id")]
    mail_id: Option<serde_json::Value>,
    #[serde(default, alias = "from")]
    from_mail: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    time: String,
}

impl MailSummary {
    /// The id arrives as a number or a string depending on the endpoint.
    fn id_string(&self) -> Option<String> {
        match &self.mail_id {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// `/api/mails/{id}` response; the plain-text body has gone by three
/// different names.
#[derive(Debug, Default, Deserialize)]
struct MailDetail {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    mail_text: Option<String>,
}

impl MailDetail {
    fn body_text(self) -> String {
        self.text
            .or(self.body)
            .or(self.mail_text)
            .unwrap_or_default()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// TempMail+ HTTP client.
#[derive(Debug, Clone)]
pub struct TempMailClient {
    http: Client,
    /// API root, e.g. `https://tempmail.plus/api`.
    base_url: String,
    /// Inbox PIN; usually blank for throwaway boxes.
    epin: String,
}

impl Default for TempMailClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TempMailClient {
    // ── Constructors ─────────────────────────────────────────────────────

    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different API root (test servers).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            epin: String::new(),
        }
    }

    pub fn set_epin(&mut self, epin: &str) {
        self.epin = epin.to_string();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────────

    fn list_url(&self, email: &str, limit: usize) -> String {
        format!(
            "{}/mails?email={}&limit={}&epin={}",
            self.base_url,
            url_encode(email),
            limit,
            url_encode(&self.epin),
        )
    }

    fn detail_url(&self, mail_id: &str, email: &str) -> String {
        format!(
            "{}/mails/{}?email={}&epin={}",
            self.base_url,
            url_encode(mail_id),
            url_encode(email),
            url_encode(&self.epin),
        )
    }

    // ── Provisioning ─────────────────────────────────────────────────────

    /// Mint a fresh throwaway address. TempMail+ mailboxes exist the
    /// moment someone sends to them, so there is no network round-trip.
    pub fn create_mailbox(&self) -> Mailbox {
        let mut rng = rand::thread_rng();
        let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
        Mailbox::new(format!("{}@{}", random_local_part(&mut rng), domain))
    }

    // ── Inbox ────────────────────────────────────────────────────────────

    /// List the mailbox and hydrate plain-text bodies for the newest
    /// messages. A provider envelope with `result: false` is an empty
    /// inbox, not an error; only transport and HTTP-status failures are.
    pub async fn fetch_inbox(
        &self,
        email: &str,
        limit: usize,
    ) -> Result<Vec<MailMessage>, MailError> {
        if !Mailbox::new(email).is_valid() {
            return Err(MailError::InvalidMailbox(email.to_string()));
        }

        let url = self.list_url(email, limit);
        let resp = self.get(&url).await?;
        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            warn!("inbox list failed for {}: {}", email, status);
            return Err(MailError::Provider {
                status: status.as_u16(),
                detail,
            });
        }

        let envelope: MailListEnvelope = resp.json().await?;
        if !envelope.result {
            debug!("provider reported no result for {}", email);
            return Ok(Vec::new());
        }

        let mut messages = Vec::with_capacity(envelope.mail_list.len().min(HYDRATE_LIMIT));
        for summary in envelope.mail_list.into_iter().take(HYDRATE_LIMIT) {
            let id = summary.id_string().unwrap_or_default();
            let text = if id.is_empty() {
                String::new()
            } else {
                self.fetch_body(&id, email).await
            };
            messages.push(MailMessage {
                id,
                from: summary.from_mail,
                subject: summary.subject,
                text,
                time: summary.time,
            });
        }
        Ok(messages)
    }

    /// Fetch one message body; failures degrade to an empty body so a
    /// single broken message does not sink the whole refresh.
    async fn fetch_body(&self, mail_id: &str, email: &str) -> String {
        let url = self.detail_url(mail_id, email);
        match self.get(&url).await {
            Ok(resp) if resp.status().is_success() => resp
                .json::<MailDetail>()
                .await
                .map(MailDetail::body_text)
                .unwrap_or_default(),
            Ok(resp) => {
                debug!("message {} fetch returned {}", mail_id, resp.status());
                String::new()
            }
            Err(e) => {
                debug!("message {} fetch failed: {}", mail_id, e);
                String::new()
            }
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.http
            .get(url)
            .header(header::ACCEPT, "application/json, text/plain, */*")
            // the provider rejects empty user agents
            .header(header::USER_AGENT, "Mozilla/5.0")
            .send()
            .await
    }
}

// ── Free-standing helpers ────────────────────────────────────────────────────

/// Random local part: short tag + clock tail + random alphanumerics, so
/// successive mints never collide.
fn random_local_part(rng: &mut impl Rng) -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string();
    let tail: String = (0..8)
        .map(|_| {
            let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";
            chars[rng.gen_range(0..chars.len())] as char
        })
        .collect();
    let clock = &millis[millis.len().saturating_sub(6)..];
    format!("bbx{}{}", clock, tail)
}

fn url_encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
