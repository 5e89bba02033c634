#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleJira,
    ConfigUnreadable(String),
    JiraNotConfigured,

    // === AUTHENTICATION MESSAGES ===
    WrongPassword(i32), // attempt count
    JiraAuthenticateFailed,
    LoggedOut,

    // === API MESSAGES ===
    JiraRequestFailed(String, String), // resource, status
    JiraUnauthorized(i32),             // attempt count
    CommentingFailed(String),          // status
    TransitionFailed(String, String),  // issue key, status

    // === ISSUE MESSAGES ===
    IssuesHeader(u32, String),   // total, login
    ProjectsHeader(String),      // login
    CommentsHeader(u32, String), // total, issue key
    CommentAdded(String),        // issue key
    NoDescription,

    // === TIME LOG MESSAGES ===
    ProgressStarted(String), // issue key
    ProgressStopped(String), // issue key
    TimeLogged { key: String, minutes: i64, seconds: i64 },
    TimeLogIntervalsHeader(String), // issue key
    TimeLogOpenInterval,

    // === PROMPTS ===
    PromptJiraLogin,
    PromptJiraUrl,
    PromptJiraPassword,
    PromptStartTransition,
    PromptStopTransition,
    PromptAcceptInvalidCerts,
}
