use crate::context::AppContext;
use crate::domain::message::CommitMessage;
use crate::error::AppResult;
use crate::workflow::commit_message::suggest_commit_message;

pub async fn run(ctx: &AppContext) -> AppResult<CommitMessage> {
    suggest_commit_message(ctx).await
}
