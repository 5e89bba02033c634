#[cfg(test)]
mod tests {
    use jirat::api::jira::{self, Jira, JiraConfig, SESSION_ID_FILE};
    use jirat::libs::data_storage::DataStorage;
    use mockito::{Matcher, ServerGuard};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct JiraTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
        server: ServerGuard,
    }

    impl AsyncTestContext for JiraTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("jirat"));
            let server = mockito::Server::new_async().await;

            JiraTestContext {
                _temp_dir: temp_dir,
                storage,
                server,
            }
        }

        async fn teardown(self) {}
    }

    impl JiraTestContext {
        fn client(&self) -> Jira {
            Jira::with_storage(&JiraConfig::new("jdoe", &self.server.url()), self.storage.clone()).unwrap()
        }

        fn cache_session(&self, session_id: &str) {
            fs::write(self.storage.get_path(SESSION_ID_FILE).unwrap(), session_id).unwrap();
        }

        fn cached_session(&self) -> Option<String> {
            fs::read_to_string(self.storage.get_path(SESSION_ID_FILE).unwrap()).ok()
        }

        fn store_password(&self, password: &str) {
            jira::secret(&self.storage).store(password).unwrap();
        }
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_assigned_issues_query(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let mock = ctx
            .server
            .mock("GET", "/rest/api/2/search")
            .match_header("cookie", "JSESSIONID=abc")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("jql".into(), "status != \"closed\" and assignee = \"jdoe\"".into()),
                Matcher::UrlEncoded("fields".into(), "summary".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "total": 2,
                    "issues": [
                        { "id": "1", "key": "PROJ-1", "fields": { "summary": "First" } },
                        { "id": "2", "key": "PROJ-2", "fields": { "summary": "Second" } }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let results = ctx.client().assigned_issues().await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.total, 2);
        assert_eq!(results.issues[1].key, "PROJ-2");
        assert_eq!(results.issues[1].fields.summary, "Second");
        assert!(results.issues[0].fields.status.is_none());
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_issue_details(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let mock = ctx
            .server
            .mock("GET", "/rest/api/2/issue/PROJ-7")
            .with_status(200)
            .with_body(
                json!({
                    "key": "PROJ-7",
                    "fields": {
                        "summary": "Crash on save",
                        "description": "Steps",
                        "project": { "name": "Project" },
                        "issuetype": { "name": "Bug" },
                        "priority": { "name": "Major" },
                        "status": { "name": "Open" }
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let issue = ctx.client().issue("PROJ-7").await.unwrap();

        mock.assert_async().await;
        assert_eq!(issue.fields.issuetype.unwrap().name, "Bug");
        assert_eq!(issue.fields.status.unwrap().name, "Open");
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_projects_and_comments(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let projects = ctx
            .server
            .mock("GET", "/rest/api/2/project")
            .with_status(200)
            .with_body(json!([{ "key": "PROJ", "name": "Project" }, { "key": "OPS", "name": "Operations" }]).to_string())
            .create_async()
            .await;
        let comments = ctx
            .server
            .mock("GET", "/rest/api/2/issue/PROJ-1/comment")
            .with_status(200)
            .with_body(
                json!({
                    "total": 1,
                    "comments": [{ "body": "Looks good", "author": { "displayName": "Jane Doe" } }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let mut client = ctx.client();
        let project_list = client.projects().await.unwrap();
        let page = client.comments("PROJ-1").await.unwrap();

        projects.assert_async().await;
        comments.assert_async().await;
        assert_eq!(project_list.len(), 2);
        assert_eq!(project_list[1].name, "Operations");
        assert_eq!(page.total, 1);
        assert_eq!(page.comments[0].author.display_name, "Jane Doe");
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_add_comment(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let mock = ctx
            .server
            .mock("POST", "/rest/api/2/issue/PROJ-1/comment")
            .match_body(Matcher::Json(json!({ "body": "Done for today" })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        ctx.client().add_comment("PROJ-1", "Done for today").await.unwrap();
        mock.assert_async().await;
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_add_comment_requires_created_status(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let _mock = ctx
            .server
            .mock("POST", "/rest/api/2/issue/PROJ-1/comment")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let err = ctx.client().add_comment("PROJ-1", "hello").await.unwrap_err();
        assert!(err.to_string().contains("Commenting failed"));
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_progress_transitions_use_configured_ids(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let start = ctx
            .server
            .mock("POST", "/rest/api/2/issue/PROJ-1/transitions")
            .match_body(Matcher::Json(json!({ "transition": { "id": "4" } })))
            .with_status(204)
            .create_async()
            .await;
        let stop = ctx
            .server
            .mock("POST", "/rest/api/2/issue/PROJ-1/transitions")
            .match_body(Matcher::Json(json!({ "transition": { "id": "301" } })))
            .with_status(204)
            .create_async()
            .await;

        let mut client = ctx.client();
        client.start_progress("PROJ-1").await.unwrap();
        client.stop_progress("PROJ-1").await.unwrap();

        start.assert_async().await;
        stop.assert_async().await;
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_failed_read_reports_status(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        let _mock = ctx
            .server
            .mock("GET", "/rest/api/2/issue/NOPE-1")
            .with_status(404)
            .with_body(json!({ "errorMessages": ["Issue does not exist"] }).to_string())
            .create_async()
            .await;

        let err = ctx.client().issue("NOPE-1").await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_login_with_stored_password(ctx: &mut JiraTestContext) {
        ctx.store_password("pw");
        let login = ctx
            .server
            .mock("POST", "/rest/auth/1/session")
            .match_body(Matcher::Json(json!({ "username": "jdoe", "password": "pw" })))
            .with_status(200)
            .with_body(json!({ "session": { "name": "JSESSIONID", "value": "fresh" } }).to_string())
            .create_async()
            .await;
        let projects = ctx
            .server
            .mock("GET", "/rest/api/2/project")
            .match_header("cookie", "JSESSIONID=fresh")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let project_list = ctx.client().projects().await.unwrap();

        login.assert_async().await;
        projects.assert_async().await;
        assert!(project_list.is_empty());
        assert_eq!(ctx.cached_session().as_deref(), Some("JSESSIONID=fresh"));
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_rejected_session_is_renewed(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=stale");
        ctx.store_password("pw");
        let rejected = ctx
            .server
            .mock("GET", "/rest/api/2/project")
            .match_header("cookie", "JSESSIONID=stale")
            .with_status(401)
            .create_async()
            .await;
        let login = ctx
            .server
            .mock("POST", "/rest/auth/1/session")
            .with_status(200)
            .with_body(json!({ "session": { "name": "JSESSIONID", "value": "fresh" } }).to_string())
            .create_async()
            .await;
        let accepted = ctx
            .server
            .mock("GET", "/rest/api/2/project")
            .match_header("cookie", "JSESSIONID=fresh")
            .with_status(200)
            .with_body(json!([{ "key": "PROJ", "name": "Project" }]).to_string())
            .create_async()
            .await;

        let project_list = ctx.client().projects().await.unwrap();

        rejected.assert_async().await;
        login.assert_async().await;
        accepted.assert_async().await;
        assert_eq!(project_list.len(), 1);
        assert_eq!(ctx.cached_session().as_deref(), Some("JSESSIONID=fresh"));
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_persistent_unauthorized_gives_up(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=stale");
        ctx.store_password("pw");
        let rejected = ctx
            .server
            .mock("GET", "/rest/api/2/project")
            .with_status(401)
            .expect(4)
            .create_async()
            .await;
        let login = ctx
            .server
            .mock("POST", "/rest/auth/1/session")
            .with_status(200)
            .with_body(json!({ "session": { "name": "JSESSIONID", "value": "fresh" } }).to_string())
            .expect(3)
            .create_async()
            .await;

        let err = ctx.client().projects().await.unwrap_err();

        rejected.assert_async().await;
        login.assert_async().await;
        assert!(err.to_string().contains("rejected the session"));
    }

    #[test_context(JiraTestContext)]
    #[tokio::test]
    async fn test_forget_removes_session_and_password(ctx: &mut JiraTestContext) {
        ctx.cache_session("JSESSIONID=abc");
        ctx.store_password("pw");

        Jira::forget(&ctx.storage).unwrap();

        assert!(ctx.cached_session().is_none());
        assert!(jira::secret(&ctx.storage).read().is_err());
        Jira::forget(&ctx.storage).unwrap();
    }
}
