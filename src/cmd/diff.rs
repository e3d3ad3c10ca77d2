use crate::context::AppContext;
use crate::domain::change::ChangeRecord;
use crate::error::AppResult;
use crate::workflow::commit_message::collect_changes;

/// Collect the changes that would be sent to the model, without calling it.
pub async fn run(ctx: &AppContext) -> AppResult<Vec<ChangeRecord>> {
    collect_changes(ctx.version_control.as_ref(), &ctx.config.exclusions).await
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use super::*;
    use crate::config::AppConfig;
    use crate::workflow::commit_message::fakes::{FakeModel, FakeRepository};

    #[tokio::test]
    async fn lists_changes_without_calling_model() {
        let config = AppConfig::from_lookup(Path::new("/repo"), |_| None).unwrap();
        let repo = Arc::new(FakeRepository::with_changes(&[
            ("dist", "bundle"),
            ("src/lib.rs", "+pub fn run() {}"),
        ]));
        let model = Arc::new(FakeModel::replying("unused"));
        let ctx = AppContext::new(config, repo, model.clone());

        let records = run(&ctx).await.unwrap();

        assert_eq!(
            records,
            vec![ChangeRecord::new("src/lib.rs", "+pub fn run() {}")]
        );
        assert!(model.requests().is_empty());
    }
}
