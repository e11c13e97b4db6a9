//! Command execution.

use dioxus_logger::tracing;

use crate::{
    command::{
        parse::Command,
        render::{build_list, item_names, title_case},
        segment::resolve_build,
    },
    error::Error,
    model::app::AppState,
    service::build::BuildService,
};

/// Executes chat commands against the shared application state.
#[derive(Clone)]
pub struct CommandHandler {
    state: AppState,
}

impl CommandHandler {
    /// Creates a handler over the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Handles one chat message from `author`.
    ///
    /// Returns `None` when the message is not a command. Failures are turned into a reply,
    /// see [`Error::user_message`].
    pub async fn handle(&self, author: &str, message: &str) -> Option<String> {
        let command = Command::parse(message)?;
        tracing::debug!("Handling {:?} from {}", command, author);

        let reply = match command {
            Command::Hello => Ok(format!("Hello {}", author)),
            Command::Add { champion, build } => self.add(author, &champion, &build).await,
            Command::Get { champion } => self.get(&champion).await,
            Command::Delete { champion } => self.delete(author, &champion).await,
            Command::Usage(usage) => Ok(usage.to_string()),
        };

        Some(reply.unwrap_or_else(|err| err.user_message()))
    }

    async fn add(&self, author: &str, champion: &str, build: &str) -> Result<String, Error> {
        let resolved = resolve_build(&self.state.matcher, build);
        let unmatched = resolved.unmatched.join(", ");

        if resolved.matched.is_empty() {
            return Ok(format!("None of those items could be matched: {}", unmatched));
        }

        let item_ids = resolved.item_ids();
        let build_service = BuildService::from_state(&self.state);
        let stored = build_service.add_build(champion, author, &item_ids).await?;

        let mut reply = format!(
            "Added build for {}: {}",
            title_case(&stored.subject),
            item_names(&self.state.catalog, &stored.item_ids)
        );
        if !resolved.unmatched.is_empty() {
            reply.push_str(&format!("\nCould not match: {}", unmatched));
        }

        Ok(reply)
    }

    async fn get(&self, champion: &str) -> Result<String, Error> {
        let build_service = BuildService::from_state(&self.state);
        let builds = build_service.get_builds(champion).await?;

        Ok(build_list(&self.state.catalog, champion, &builds))
    }

    async fn delete(&self, author: &str, champion: &str) -> Result<String, Error> {
        let build_service = BuildService::from_state(&self.state);
        let removed = build_service.delete_builds(champion, author).await?;

        Ok(match removed {
            0 => format!("You have no builds for {}", title_case(champion)),
            1 => format!("Deleted 1 build for {}", title_case(champion)),
            n => format!("Deleted {} builds for {}", n, title_case(champion)),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use buildbook_test_utils::prelude::*;

    use super::*;
    use crate::catalog::Catalog;

    fn handler(test: &TestContext) -> CommandHandler {
        let catalog = Catalog::from_json(MOCK_CATALOG_JSON).expect("mock catalog is valid");
        let state = AppState::new(test.db.clone(), Arc::new(catalog), Duration::from_secs(5));

        CommandHandler::new(state)
    }

    /// Expect None for ordinary chat
    #[tokio::test]
    async fn ignores_non_commands() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        assert_eq!(handler(&test).handle("usera", "hello there").await, None);

        Ok(())
    }

    /// Expect a greeting addressed to the author
    #[tokio::test]
    async fn greets_author() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let reply = handler(&test).handle("UserA", "!hello").await;

        assert_eq!(reply.as_deref(), Some("Hello UserA"));

        Ok(())
    }

    /// Expect resolved items to be stored and listed by name
    #[tokio::test]
    async fn adds_and_lists_build() -> Result<(), TestError> {
        let test = TestBuilder::new().with_build_tables().build().await?;
        let handler = handler(&test);

        let reply = handler.handle("UserA", "!add Ashe mercs, voidstaff").await;
        assert_eq!(
            reply.as_deref(),
            Some("Added build for Ashe: Mercury's Treads, Void Staff")
        );

        let reply = handler.handle("UserB", "!get ashe").await;
        assert_eq!(
            reply.as_deref(),
            Some("**Builds for Ashe**:\n- Mercury's Treads, Void Staff *(by usera)*")
        );

        Ok(())
    }

    /// Expect unmatched phrases to be reported next to the stored build
    #[tokio::test]
    async fn reports_unmatched_phrases() -> Result<(), TestError> {
        let test = TestBuilder::new().with_build_tables().build().await?;

        let reply = handler(&test)
            .handle("usera", "!add ashe void staff, banana")
            .await;

        assert_eq!(
            reply.as_deref(),
            Some("Added build for Ashe: Void Staff\nCould not match: banana")
        );
        assert_eq!(test.builds().count_builds("ashe", "usera").await?, 1);

        Ok(())
    }

    /// Expect nothing stored when no phrase matches
    #[tokio::test]
    async fn rejects_fully_unmatched_build() -> Result<(), TestError> {
        let test = TestBuilder::new().with_build_tables().build().await?;

        let reply = handler(&test)
            .handle("usera", "!add ashe banana, qwerty")
            .await;

        assert_eq!(
            reply.as_deref(),
            Some("None of those items could be matched: banana, qwerty")
        );
        assert_eq!(test.builds().count_builds("ashe", "usera").await?, 0);

        Ok(())
    }

    /// Expect the empty listing reply for a champion without builds
    #[tokio::test]
    async fn reports_no_builds() -> Result<(), TestError> {
        let test = TestBuilder::new().with_build_tables().build().await?;

        let reply = handler(&test).handle("usera", "!get ashe").await;

        assert_eq!(reply.as_deref(), Some("No such builds found"));

        Ok(())
    }

    /// Expect delete to remove only the requester's builds
    #[tokio::test]
    async fn deletes_own_builds() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_build_tables()
            .with_build("ashe", "usera", &[MERCURYS_TREADS_ID])
            .with_build("ashe", "userb", &[VOID_STAFF_ID])
            .build()
            .await?;
        let handler = handler(&test);

        let reply = handler.handle("UserA", "!delete Ashe").await;
        assert_eq!(reply.as_deref(), Some("Deleted 1 build for Ashe"));

        let reply = handler.handle("UserA", "!delete Ashe").await;
        assert_eq!(reply.as_deref(), Some("You have no builds for Ashe"));

        assert_eq!(test.builds().count_builds("ashe", "userb").await?, 1);

        Ok(())
    }

    /// Expect usage hints for incomplete commands
    #[tokio::test]
    async fn replies_with_usage() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let handler = handler(&test);

        assert_eq!(
            handler.handle("usera", "!add ashe").await.as_deref(),
            Some(crate::command::parse::ADD_USAGE)
        );
        assert_eq!(
            handler.handle("usera", "!dance").await.as_deref(),
            Some(crate::command::parse::HELP)
        );

        Ok(())
    }

    /// Expect a generic reply when the backend fails
    #[tokio::test]
    async fn replies_on_database_error() -> Result<(), TestError> {
        // No tables, every query fails
        let test = TestBuilder::new().build().await?;

        let reply = handler(&test).handle("usera", "!get ashe").await;

        assert_eq!(
            reply.as_deref(),
            Some("Something went wrong while handling that command.")
        );

        Ok(())
    }
}
