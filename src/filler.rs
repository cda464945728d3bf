/*!
 * Demo-content backfill for files that were empty when moved
 *
 * A moved file is eligible only while it is exactly zero bytes. Eligibility
 * is decided on the lowercased extension, unlike classification, so a file
 * that fell to Others on case grounds can still be filled.
 */

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::assets;
use crate::category::extension_of;
use crate::oplog::{OpKind, OperationLog, SYSCALL_COPY, SYSCALL_WRITE};

/// Built-in text bodies used when no `.txt` asset is available.
pub static TEXT_TEMPLATES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Meeting Notes - Q4 Planning\n\nDate: 2024-11-15\nAttendees: Alice, Bob, Charlie\n\nAgenda:\n1. Budget review for next quarter\n2. New product roadmap discussion\n3. Team restructuring proposals\n\nKey Decisions:\n- Approved 15% budget increase for R&D\n- Launch date set for March 2025\n- Two new hires approved for engineering team\n",
        "Project Status Report\n\nProject: Smart File Organizer v2.0\nStatus: On Track\nSprint: 14 of 20\n\nCompleted This Week:\n- Implemented file categorization algorithm\n- Added support for 15+ file extensions\n- Integrated with cloud storage API\n- Fixed 3 critical bugs from QA testing\n",
        "Dear Team,\n\nI hope this message finds you well. I wanted to share some exciting updates about our upcoming product launch.\n\nAfter months of hard work, we are pleased to announce that the Smart File Organizer will be released on March 15, 2025.\n\nKey Features:\n- Automatic file categorization by type\n- Smart duplicate detection\n- Cloud backup integration\n- Cross-platform compatibility\n\nBest regards,\nThe Development Team\n",
        "Recipe: Classic Chocolate Chip Cookies\n\nPrep Time: 15 minutes\nCook Time: 12 minutes\nServings: 48 cookies\n\nIngredients:\n- 2 1/4 cups all-purpose flour\n- 1 tsp baking soda\n- 1 tsp salt\n- 1 cup butter, softened\n- 2 large eggs\n- 2 cups chocolate chips\n\nInstructions:\n1. Preheat oven to 375 degrees F\n2. Mix flour, baking soda and salt\n3. Beat butter, sugars, eggs and vanilla\n4. Stir in chocolate chips\n5. Bake for 9 to 11 minutes\n",
        "Daily Journal Entry\n\nDate: Wednesday, November 20, 2024\nWeather: Partly cloudy, 18 degrees C\nMood: Productive and optimistic\n\nToday was a remarkably productive day. I managed to complete the file organization module that I have been working on for the past week.\n\nTomorrow, I plan to start working on the user interface improvements and write some unit tests for the sorting algorithm.\n\nGratitude list:\n- Supportive team members\n- Good health\n- Beautiful weather for running\n",
    ]
});

/// Backfill policy for one file kind. These rules are matched on lowercase
/// extensions and are deliberately separate from the classification table.
struct FillRule {
    /// Extensions this rule applies to, lowercase with dot
    extensions: &'static [&'static str],
    /// Asset pool subdirectory under the assets root
    pool: &'static str,
    /// Extensions accepted from the pool, lowercase with dot
    asset_extensions: &'static [&'static str],
    /// Whether a built-in template backs the rule when no asset matches
    template_fallback: bool,
    description: &'static str,
}

static FILL_RULES: &[FillRule] = &[
    FillRule {
        extensions: &[".txt"],
        pool: "documents",
        asset_extensions: &[".txt"],
        template_fallback: true,
        description: "Fill txt with demo content",
    },
    FillRule {
        extensions: &[".pdf"],
        pool: "documents",
        asset_extensions: &[".pdf"],
        template_fallback: false,
        description: "Fill pdf with demo content",
    },
    FillRule {
        extensions: &[".png", ".jpg", ".jpeg"],
        pool: "images",
        asset_extensions: &[".png", ".jpg", ".jpeg"],
        template_fallback: false,
        description: "Fill image with demo content",
    },
    FillRule {
        extensions: &[".mp3"],
        pool: "audio",
        asset_extensions: &[".mp3"],
        template_fallback: false,
        description: "Fill mp3 with demo content",
    },
    FillRule {
        extensions: &[".mp4"],
        pool: "videos",
        asset_extensions: &[".mp4"],
        template_fallback: false,
        description: "Fill mp4 with demo content",
    },
];

/// Fills just-moved empty files with demo content from an asset pool.
pub struct ContentFiller<'a> {
    assets_root: &'a Path,
}

impl<'a> ContentFiller<'a> {
    pub fn new(assets_root: &'a Path) -> Self {
        Self { assets_root }
    }

    /// Fill `path` if it is eligible.
    ///
    /// Exactly one record is appended per successful fill; skipped and
    /// failed fills append nothing.
    pub fn fill<R: Rng>(&self, path: &Path, log: &mut OperationLog, rng: &mut R) {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(_) => return,
        };
        if size > 0 {
            return;
        }

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => return,
        };
        let ext = match extension_of(&name) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => return,
        };
        let rule = match FILL_RULES
            .iter()
            .find(|rule| rule.extensions.contains(&ext.as_str()))
        {
            Some(rule) => rule,
            None => return,
        };

        let pool = self.assets_root.join(rule.pool);
        if let Some(asset) = assets::pick(&pool, rule.asset_extensions, rng) {
            if fs::copy(&asset, path).is_ok() {
                log.success(OpKind::CopyFile, rule.description, SYSCALL_COPY, &asset, Some(path));
            }
        } else if rule.template_fallback {
            if let Some(template) = TEXT_TEMPLATES.choose(rng) {
                if fs::write(path, template).is_ok() {
                    log.success(OpKind::WriteFile, rule.description, SYSCALL_WRITE, path, None);
                }
            }
        }
    }
}
