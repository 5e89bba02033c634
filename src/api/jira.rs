use super::{remove_if_exists, Session};
use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_bail_anyhow;
use anyhow::{anyhow, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use reqwest::{
    header::{HeaderValue, COOKIE},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

pub const SESSION_ID_FILE: &str = ".jira_session_id";
pub const SECRET_FILE: &str = ".jira_secret";
const AUTH_URL: &str = "rest/auth/1/session";
const SEARCH_URL: &str = "rest/api/2/search";
const ISSUE_URL: &str = "rest/api/2/issue";
const PROJECT_URL: &str = "rest/api/2/project";

/// Times a 401 is answered with a fresh login before the call fails.
const MAX_UNAUTHORIZED_RETRIES: i32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_START_TRANSITION: &str = "4";
const DEFAULT_STOP_TRANSITION: &str = "301";

#[derive(Serialize, Clone, Debug)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

#[derive(Deserialize, Debug)]
struct JiraSessionResponse {
    session: JiraSession,
}

#[derive(Deserialize, Debug)]
struct JiraSession {
    name: String,
    value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
}

/// Issue fields. Search results only carry `summary`, hence the optionals.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project: Option<JiraNamed>,
    #[serde(default)]
    pub issuetype: Option<JiraNamed>,
    #[serde(default)]
    pub priority: Option<JiraNamed>,
    #[serde(default)]
    pub status: Option<JiraNamed>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraNamed {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraSearchResults {
    pub total: u32,
    pub issues: Vec<JiraIssue>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraProject {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraComments {
    pub total: u32,
    pub comments: Vec<JiraComment>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct JiraComment {
    #[serde(default)]
    pub body: String,
    pub author: JiraAuthor,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraAuthor {
    pub display_name: String,
}

/// The encrypted Jira password store inside `storage`.
pub fn secret(storage: &DataStorage) -> Secret {
    Secret::new(storage, SECRET_FILE, &Message::PromptJiraPassword.to_string())
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
    storage: DataStorage,
    credentials: Option<LoginCredentials>,
    retries: i32,
}

impl Session for Jira {
    async fn login(&self) -> Result<String> {
        let credentials = self.credentials.as_ref().ok_or_else(|| anyhow!("Jira credentials are not set"))?;
        let auth_res = self.client.post(self.url(AUTH_URL)).json(credentials).send().await?;

        if !auth_res.status().is_success() {
            msg_bail_anyhow!(Message::JiraAuthenticateFailed);
        }

        let session_res = auth_res.json::<JiraSessionResponse>().await?;
        Ok(format!("{}={}", session_res.session.name, session_res.session.value))
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.credentials = Some(LoginCredentials {
            username: self.config.login.clone(),
            password: password.to_owned(),
        });
        Ok(())
    }

    fn session_id_file(&self) -> &str {
        SESSION_ID_FILE
    }

    fn storage(&self) -> &DataStorage {
        &self.storage
    }

    fn secret(&self) -> Secret {
        secret(&self.storage)
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Result<Self> {
        Self::with_storage(config, DataStorage::new())
    }

    /// Client whose session and password files live in `storage`.
    pub fn with_storage(config: &JiraConfig, storage: DataStorage) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            storage,
            credentials: None,
            retries: 0,
        })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Removes the cached session and the stored password from `storage`.
    pub fn forget(storage: &DataStorage) -> Result<()> {
        remove_if_exists(&storage.dir(SESSION_ID_FILE))?;
        secret(storage).delete()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    /// Sends an authenticated request, renewing the session on 401.
    async fn send(&mut self, method: Method, path: &str, query: &[(&str, &str)], body: Option<&Value>) -> Result<Response> {
        let url = self.url(path);
        let mut rejected = 0;

        loop {
            let session_id = self.get_session_id().await?;
            let mut request = self
                .client
                .request(method.clone(), url.as_str())
                .header(COOKIE, HeaderValue::from_str(&session_id)?);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!(%method, %url, "jira request");
            let response = request.send().await?;
            tracing::debug!(status = %response.status(), "jira response");

            if response.status() != StatusCode::UNAUTHORIZED {
                return Ok(response);
            }

            rejected += 1;
            if rejected > MAX_UNAUTHORIZED_RETRIES {
                msg_bail_anyhow!(Message::JiraUnauthorized(rejected));
            }
            self.delete_session_id()?;
        }
    }

    async fn get_json<T: DeserializeOwned>(&mut self, resource: &str, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self.send(Method::GET, path, query, None).await?;
        if !response.status().is_success() {
            msg_bail_anyhow!(Message::JiraRequestFailed(resource.to_string(), response.status().to_string()));
        }
        Ok(response.json::<T>().await?)
    }

    /// Open issues assigned to the configured login.
    pub async fn assigned_issues(&mut self) -> Result<JiraSearchResults> {
        let jql = format!("status != \"closed\" and assignee = \"{}\"", self.config.login);
        self.get_json("assigned issues", SEARCH_URL, &[("jql", jql.as_str()), ("fields", "summary")])
            .await
    }

    pub async fn issue(&mut self, key: &str) -> Result<JiraIssue> {
        self.get_json(&format!("issue {}", key), &format!("{}/{}", ISSUE_URL, key), &[])
            .await
    }

    pub async fn projects(&mut self) -> Result<Vec<JiraProject>> {
        self.get_json("projects", PROJECT_URL, &[]).await
    }

    pub async fn comments(&mut self, key: &str) -> Result<JiraComments> {
        self.get_json(&format!("comments on {}", key), &format!("{}/{}/comment", ISSUE_URL, key), &[])
            .await
    }

    /// Posts a comment. Jira answers 201 on success; anything else is an error.
    pub async fn add_comment(&mut self, key: &str, body: &str) -> Result<()> {
        let payload = json!({ "body": body });
        let path = format!("{}/{}/comment", ISSUE_URL, key);
        let response = self.send(Method::POST, &path, &[], Some(&payload)).await?;

        if response.status() != StatusCode::CREATED {
            msg_bail_anyhow!(Message::CommentingFailed(response.status().to_string()));
        }
        Ok(())
    }

    pub async fn transition(&mut self, key: &str, transition_id: &str) -> Result<()> {
        let payload = json!({ "transition": { "id": transition_id } });
        let path = format!("{}/{}/transitions", ISSUE_URL, key);
        let response = self.send(Method::POST, &path, &[], Some(&payload)).await?;

        if !response.status().is_success() {
            msg_bail_anyhow!(Message::TransitionFailed(key.to_string(), response.status().to_string()));
        }
        Ok(())
    }

    pub async fn start_progress(&mut self, key: &str) -> Result<()> {
        let transition_id = self.config.start_transition.clone();
        self.transition(key, &transition_id).await
    }

    pub async fn stop_progress(&mut self, key: &str) -> Result<()> {
        let transition_id = self.config.stop_transition.clone();
        self.transition(key, &transition_id).await
    }
}

fn default_start_transition() -> String {
    DEFAULT_START_TRANSITION.to_string()
}

fn default_stop_transition() -> String {
    DEFAULT_STOP_TRANSITION.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub login: String,
    pub api_url: String,
    /// Workflow transition id behind "Start Progress".
    #[serde(default = "default_start_transition")]
    pub start_transition: String,
    /// Workflow transition id behind "Stop Progress".
    #[serde(default = "default_stop_transition")]
    pub stop_transition: String,
    /// Skip TLS certificate verification, for self-signed installations.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl JiraConfig {
    pub fn new(login: &str, api_url: &str) -> Self {
        Self {
            login: login.to_string(),
            api_url: api_url.to_string(),
            start_transition: default_start_transition(),
            stop_transition: default_stop_transition(),
            accept_invalid_certs: false,
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_else(|| Self::new("", ""));
        let theme = ColorfulTheme::default();

        Ok(Self {
            login: Input::with_theme(&theme)
                .with_prompt(Message::PromptJiraLogin.to_string())
                .default(config.login)
                .interact_text()?,
            api_url: Input::with_theme(&theme)
                .with_prompt(Message::PromptJiraUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            start_transition: Input::with_theme(&theme)
                .with_prompt(Message::PromptStartTransition.to_string())
                .default(config.start_transition)
                .interact_text()?,
            stop_transition: Input::with_theme(&theme)
                .with_prompt(Message::PromptStopTransition.to_string())
                .default(config.stop_transition)
                .interact_text()?,
            accept_invalid_certs: Confirm::with_theme(&theme)
                .with_prompt(Message::PromptAcceptInvalidCerts.to_string())
                .default(config.accept_invalid_certs)
                .interact()?,
        })
    }
}
