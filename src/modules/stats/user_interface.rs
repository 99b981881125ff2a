use super::summary::UsageReport;
use crate::modules::auth::store::UserStore;
use crate::modules::error::FlowError;
use crate::modules::utils::io::Prompter;

/// Print mean, mode and median of ages and usage times. Returns the report, if any.
pub fn handle_statistics(
    store: &UserStore,
    prompter: &mut dyn Prompter,
) -> Result<Option<UsageReport>, FlowError> {
    let users = store.load()?;
    let report = match UsageReport::from_users(&users) {
        Some(report) => report,
        None => {
            prompter.say("No data to analyze.");
            prompter.say("");
            return Ok(None);
        }
    };

    prompter.say("Platform usage statistics:");
    prompter.say(&format!("- Mean age: {} years", report.age.mean_display()));
    prompter.say(&format!("- Mode age: {} years", report.age.mode));
    prompter.say(&format!("- Median age: {} years", report.age.median));
    prompter.say(&format!(
        "- Mean usage time: {} minutes",
        report.usage_minutes.mean_display()
    ));
    prompter.say(&format!(
        "- Mode usage time: {} minutes",
        report.usage_minutes.mode
    ));
    prompter.say(&format!(
        "- Median usage time: {} minutes",
        report.usage_minutes.median
    ));
    prompter.say("");
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::store::User;
    use crate::modules::utils::io::testing::ScriptedPrompter;
    use tempfile::tempdir;

    #[test]
    fn test_statistics_output() {
        let dir = tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.json"));
        store
            .save(&[
                User::new("Ana".to_string(), "ana".to_string(), "x", 20, 30),
                User::new("Bia".to_string(), "bia".to_string(), "x", 20, 60),
                User::new("Caio".to_string(), "caio".to_string(), "x", 30, 90),
            ])
            .unwrap();

        let mut prompter = ScriptedPrompter::new(&[]);
        let report = handle_statistics(&store, &mut prompter).unwrap();
        assert!(report.is_some());

        let printed = prompter.printed();
        assert!(printed.contains("- Mean age: 23.33 years"));
        assert!(printed.contains("- Mode age: 20 years"));
        assert!(printed.contains("- Median age: 20 years"));
        assert!(printed.contains("- Mean usage time: 60.00 minutes"));
        assert!(printed.contains("- Mode usage time: 30 minutes"));
        assert!(printed.contains("- Median usage time: 60 minutes"));
    }

    #[test]
    fn test_statistics_without_users() {
        let dir = tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.json"));

        let mut prompter = ScriptedPrompter::new(&[]);
        assert!(handle_statistics(&store, &mut prompter).unwrap().is_none());
        assert!(prompter.printed().contains("No data to analyze."));
    }
}
