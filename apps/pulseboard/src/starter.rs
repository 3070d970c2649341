//! # Starter Scorecard
//!
//! The recommended starting scorecard for a new deployment, written by
//! `pulseboard init`. Ten GSM metrics across three sections, the full
//! integration checklist, and a six-step rollout timeline.
//!
//! Every reading here is sample data. The rollout plan assumes the team
//! replaces it with live integrations over the first two months.

/// Starter definitions document in TOML form.
pub const STARTER_SCORECARD: &str = r#"# Pulseboard scorecard definitions.
# Edit freely; `pulseboard` commands read and rewrite this file.

# =============================================================================
# GSM METRICS
# =============================================================================

[[metric]]
id = "ai_defects"
goal = "Quality"
signal = "AI-assisted PRs produce fewer defects"
metric = "Defect rate per PR (AI vs. non-AI)"
value = "3.2 vs 5.8"
target = "AI <=4.0"
measurement = { value = "3.2", target = "4", direction = "lower-is-better" }
trend = -12
type = "quantitative"
section = "ai-token-use"

[[metric]]
id = "token_budget"
goal = "Efficiency"
signal = "Teams operate within AI token budgets"
metric = "Weekly tokens consumed vs. budget (K)"
value = "930K / 700K"
target = "<=700K/wk"
measurement = { value = "930", target = "700", direction = "lower-is-better" }
trend = 18
type = "quantitative"
section = "ai-token-use"

[[metric]]
id = "ai_pr_ratio"
goal = "Adoption"
signal = "Growing AI-assisted PR share"
metric = "% of PRs using AI assistance"
value = "61%"
target = ">=60%"
measurement = { value = "61", target = "60", direction = "higher-is-better" }
trend = 8
type = "quantitative"
section = "ai-token-use"

[[metric]]
id = "priority_delivery"
goal = "Impact"
signal = "Top product priorities ship on time"
metric = "P1 features delivered per sprint"
value = "18/23"
target = ">=80%"
measurement = { value = "78.3", target = "80", direction = "higher-is-better" }
trend = 5
type = "quantitative"
section = "delivery"

[[metric]]
id = "cycle_time"
goal = "Flow"
signal = "PRs move quickly from open to merge"
metric = "Median PR cycle time (hours)"
value = "18h"
target = "<=24h"
measurement = { value = "18", target = "24", direction = "lower-is-better" }
trend = -9
type = "quantitative"
section = "delivery"

[[metric]]
id = "tech_updates"
goal = "Tech Health"
signal = "Dependencies and frameworks stay current"
metric = "Tech updates / modernizations per month"
value = "2.5 avg"
target = ">=3/mo"
measurement = { value = "2.5", target = "3", direction = "higher-is-better" }
trend = -15
type = "quantitative"
section = "tech-health"

[[metric]]
id = "debt_ratio"
goal = "Tech Health"
signal = "Tech debt doesn't accumulate uncontrolled"
metric = "% sprints with debt reduction items shipped"
value = "60%"
target = ">=70%"
measurement = { value = "60", target = "70", direction = "higher-is-better" }
trend = -5
type = "quantitative"
section = "tech-health"

[[metric]]
id = "ai_confidence"
goal = "Happiness"
signal = "Devs feel confident using AI tools"
metric = "Survey: AI assistance confidence (1-5)"
value = "4.1 / 5"
target = ">=4.0"
measurement = { value = "4.1", target = "4", direction = "higher-is-better" }
trend = 3
type = "qualitative"
section = "ai-token-use"

[[metric]]
id = "priority_clarity"
goal = "Happiness"
signal = "Team understands what matters most"
metric = "Survey: priority clarity score (1-5)"
value = "3.9 / 5"
target = ">=4.0"
measurement = { value = "3.9", target = "4", direction = "higher-is-better" }
trend = 2
type = "qualitative"
section = "delivery"

[[metric]]
id = "tech_awareness"
goal = "Tech Health"
signal = "Devs know where tech debt lives"
metric = "Survey: tech debt awareness (1-5)"
value = "3.2 / 5"
target = ">=3.5"
measurement = { value = "3.2", target = "3.5", direction = "higher-is-better" }
trend = -4
type = "qualitative"
section = "tech-health"

# =============================================================================
# INTEGRATION CHECKLIST
# =============================================================================

[[group]]
id = "ai"
title = "AI & Token Use"

[[group.items]]
id = "a1"
group_label = "Anthropic Console"
text = "Generate an Admin API key (sk-ant-admin...) in the Anthropic Console"

[[group.items]]
id = "a2"
group_label = "Anthropic Console"
text = "Store key as ANTHROPIC_ADMIN_API_KEY environment variable"

[[group.items]]
id = "a3"
group_label = "Anthropic Console"
text = "Call GET /v1/organizations/usage_report/messages with bucket_width=1d"
example = '''
curl "https://api.anthropic.com/v1/organizations/usage_report/messages?starting_at=2026-02-13T00:00:00Z&ending_at=2026-02-20T00:00:00Z&bucket_width=1d" \
  --header "anthropic-version: 2023-06-01" \
  --header "x-api-key: $ANTHROPIC_ADMIN_API_KEY"'''

[[group.items]]
id = "a4"
group_label = "Anthropic Console"
text = "Map input_tokens + output_tokens to a weekly total and compare to budget"

[[group.items]]
id = "a5"
group_label = "Anthropic Console"
text = "Set up a weekly cron/GitHub Action and wire the token series"

[[group.items]]
id = "a6"
group_label = "GitHub PR Defects"
text = "Add PR label convention: ai-assisted (applied manually or via GitHub Action)"

[[group.items]]
id = "a7"
group_label = "GitHub PR Defects"
text = "Track bugs linked to PRs using a defect or regression label on issues"

[[group.items]]
id = "a8"
group_label = "GitHub PR Defects"
text = "Query AI PRs: GET /repos/{owner}/{repo}/pulls?state=closed&labels=ai-assisted"

[[group.items]]
id = "a9"
group_label = "GitHub PR Defects"
text = "Calculate defect_count / pr_count for each group and wire the defect series"

[[group.items]]
id = "a10"
group_label = "Per-Developer Tokens"
text = "Create per-developer API keys under separate workspaces in Anthropic Console"

[[group.items]]
id = "a11"
group_label = "Per-Developer Tokens"
text = "Use group_by[]=api_key in the usage report endpoint for per-key breakdown"

[[group.items]]
id = "a12"
group_label = "Per-Developer Tokens"
text = "Map API keys to developer names in a config file (secrets only, not repo)"

[[group]]
id = "delivery"
title = "Delivery"

[[group.items]]
id = "d1"
group_label = "Jira"
text = "Authenticate with JIRA_API_TOKEN, JIRA_BASE_URL, JIRA_EMAIL"

[[group.items]]
id = "d2"
group_label = "Jira"
text = "Query planned P1s and closed P1s per sprint"
example = "project = MYPROJECT AND priority = Highest AND sprint in closedSprints() ORDER BY sprint ASC"

[[group.items]]
id = "d3"
group_label = "Jira"
text = "Calculate delivered / planned per sprint and wire the delivery series"

[[group.items]]
id = "d4"
group_label = "Linear (alternative)"
text = "Use LINEAR_API_KEY to query cycles, filter by priority: URGENT and state.type: completed"

[[group.items]]
id = "d5"
group_label = "GitHub Actions"
text = "GET /repos/{owner}/{repo}/pulls?state=closed and compute merged_at - created_at per PR"

[[group.items]]
id = "d6"
group_label = "GitHub Actions"
text = "GET /repos/{owner}/{repo}/actions/runs, count success vs. failure for build success rate"

[[group.items]]
id = "d7"
group_label = "GitHub Actions"
text = "GET /repos/{owner}/{repo}/deployments, count deploys per time window"

[[group.items]]
id = "d8"
group_label = "GitHub Actions"
text = "Wire the delivery funnel series"

[[group]]
id = "tech"
title = "Tech Health"

[[group.items]]
id = "t1"
group_label = "Dependabot / Renovate"
text = "Enable Dependabot on repos: add .github/dependabot.yml"

[[group.items]]
id = "t2"
group_label = "Dependabot / Renovate"
text = "GET /repos/{owner}/{repo}/dependabot/alerts?state=open, count critical alerts"

[[group.items]]
id = "t3"
group_label = "Dependabot / Renovate"
text = "Count merged PRs with label dependencies per month and wire the tech debt series"

[[group.items]]
id = "t4"
group_label = "Dependabot / Renovate"
text = "Set alert threshold: if open critical alerts exceed the limit, flag At Risk"

[[group.items]]
id = "t5"
group_label = "SonarQube / CodeClimate"
text = "Set up SonarQube Cloud (free for public repos) or self-hosted"

[[group.items]]
id = "t6"
group_label = "SonarQube / CodeClimate"
text = "Call GET /api/measures/component?metricKeys=coverage,sqale_index,code_smells"

[[group.items]]
id = "t7"
group_label = "SonarQube / CodeClimate"
text = "Map coverage to Test Coverage Gap and code_smells to Flagged for Refactor"

[[group.items]]
id = "t8"
group_label = "SonarQube / CodeClimate"
text = "Wire the tech debt composition series"

[[group]]
id = "survey"
title = "Developer Survey"

[[group.items]]
id = "s1"
group_label = "Setup"
text = "Create a recurring bi-weekly survey (Google Forms, Typeform, or Slack workflow)"

[[group.items]]
id = "s2"
group_label = "Setup"
text = "Add 6 standard questions: AI speed, correction judgment, token limits, priority clarity, tech debt awareness, safety to raise concerns"

[[group.items]]
id = "s3"
group_label = "Automation"
text = "Export responses to a Google Sheet or CSV"

[[group.items]]
id = "s4"
group_label = "Automation"
text = "Wire Google Sheets API or Typeform webhook into the data store"

[[group.items]]
id = "s5"
group_label = "Automation"
text = "Calculate mean per question per survey cycle and wire the survey series"

[[group.items]]
id = "s6"
group_label = "Automation"
text = "Put survey cadence on the team calendar"

[[group]]
id = "infra"
title = "Data Store & Automation"

[[group.items]]
id = "i1"
group_label = "Data Backend"
text = "Simple: GitHub-hosted JSON files updated by Actions (good for small teams)"

[[group.items]]
id = "i2"
group_label = "Data Backend"
text = "Mid-tier: Supabase (Postgres, free tier, REST API)"

[[group.items]]
id = "i3"
group_label = "Data Backend"
text = "Full: PostHog, Grafana + InfluxDB, or Datadog for time-series"

[[group.items]]
id = "i4"
group_label = "Secrets"
text = "Store all API keys in CI secrets or .env, never commit to repo"
example = '''
ANTHROPIC_ADMIN_API_KEY=sk-ant-admin...
GITHUB_TOKEN=ghp_...
JIRA_API_TOKEN=...
JIRA_BASE_URL=https://yourorg.atlassian.net
JIRA_EMAIL=you@yourorg.com
LINEAR_API_KEY=lin_api_...
SONARQUBE_TOKEN=...
GOOGLE_SHEETS_API_KEY=...'''

[[group.items]]
id = "i5"
group_label = "Done When"
text = "No hardcoded sample data remains in the scorecard"

[[group.items]]
id = "i6"
group_label = "Done When"
text = "A GitHub Action or cron job runs daily and updates the data layer"

[[group.items]]
id = "i7"
group_label = "Done When"
text = "Token budget threshold is agreed upon and documented"

# =============================================================================
# ROLLOUT TIMELINE
# =============================================================================

[[step]]
label = "Week 1"
title = "Deploy with sample data"
description = "Run the dashboard in a standup. Get buy-in on which metrics matter."
completed = true

[[step]]
label = "Week 2"
title = "Hook up GitHub"
description = "PRs, cycle time, build stats. These are the easiest integrations."
completed = false

[[step]]
label = "Week 3"
title = "Hook up Anthropic Console"
description = "Token data. Set your first budget threshold."
completed = false

[[step]]
label = "Week 4"
title = "Launch first pulse survey"
description = "Baseline the qualitative scores."
completed = false

[[step]]
label = "Month 2"
title = "Jira/Linear + Dependabot"
description = "P1 delivery tracking and tech health."
completed = false

[[step]]
label = "Month 3"
title = "SonarQube + Review"
description = "Code quality depth. Review all metrics and drop any not driving decisions."
completed = false
"#;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::STARTER_SCORECARD;
    use crate::defs::ScorecardFile;

    #[test]
    fn starter_parses_and_builds_a_session() {
        let file: ScorecardFile = toml::from_str(STARTER_SCORECARD).unwrap();
        assert_eq!(file.metric.len(), 10);
        assert_eq!(file.group.len(), 5);
        assert_eq!(file.step.len(), 6);
        assert!(file.checked.is_empty());

        let session = file.into_session().unwrap();
        assert_eq!(session.catalog().len(), 10);
        assert_eq!(session.checklist().overall_completion().total, 41);
        assert_eq!(session.rollout().len(), 6);
        assert_eq!(session.rollout().completion().completed, 1);
    }
}
