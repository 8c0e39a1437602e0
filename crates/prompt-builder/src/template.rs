//! The code review prompt wrapped around a unified diff.

/// Which review goals the prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewObjectives {
    /// Prefer readability when trade-offs are ambiguous
    pub readability_first: bool,

    /// Point out performance pitfalls and needless allocations
    pub performance_hints: bool,

    /// Suggest consolidating style and naming
    pub style_consolidation: bool,
}

impl Default for ReviewObjectives {
    fn default() -> Self {
        Self {
            readability_first: true,
            performance_hints: true,
            style_consolidation: true,
        }
    }
}

/// Everything the prompt is rendered from
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub language: String,
    pub repository: String,
    /// Unified diff text, ending in a newline unless empty
    pub diff: String,
    pub objectives: ReviewObjectives,
}

fn checkbox(enabled: bool) -> &'static str {
    if enabled {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Render the review prompt. Identical requests render identical text.
pub fn render_prompt(request: &PromptRequest) -> String {
    let objectives = &request.objectives;
    let mut out = String::new();

    out.push_str(&format!(
        "You are a strictly deterministic static analysis assistant for {} code.\n",
        request.language
    ));
    out.push_str("Your job: review the following code changes and produce actionable, line-anchored improvement suggestions.\n\n");

    out.push_str("Context:\n");
    out.push_str(&format!("- Repository/Module: {}\n", request.repository));
    out.push_str("- Non-goals: do NOT invent behavior; base all comments on diff only.\n");
    out.push_str("- Determinism: output MUST be stable for identical input.\n\n");

    out.push_str("Inspection objectives (current run):\n");
    out.push_str(&format!(
        "  {} Prefer readability when trade-offs are ambiguous.\n",
        checkbox(objectives.readability_first)
    ));
    out.push_str(&format!(
        "  {} Surface potential performance pitfalls and micro-allocations.\n",
        checkbox(objectives.performance_hints)
    ));
    out.push_str(&format!(
        "  {} Suggest style consolidation (DRY, consistent naming, idioms).\n\n",
        checkbox(objectives.style_consolidation)
    ));

    out.push_str("Unified diff to analyze (use as ground truth):\n");
    out.push_str("```diff\n");
    out.push_str(&request.diff);
    out.push_str("```\n\n");

    out.push_str("Required output (JSON, deterministic ordering by file > hunk start > rule):\n");
    out.push_str(concat!(
        "{\n",
        "  \"summary\": \"<1-2 sentences on overall risk/readability/style>\",\n",
        "  \"findings\": [\n",
        "    {\n",
        "      \"file\": \"<path or before/after filename>\",\n",
        "      \"line\": <line_number_in_new_file_or_null>,\n",
        "      \"rule\": \"<readability|complexity|perf|style|bug-risk>\",\n",
        "      \"severity\": \"info|warning|error\",\n",
        "      \"explanation\": \"<why this matters>\",\n",
        "      \"suggestion\": \"<specific edit or pattern to apply>\"\n",
        "    }\n",
        "  ],\n",
        "  \"metrics\": {\n",
        "    \"estimated_cyclomatic_delta\": <int>,\n",
        "    \"allocations_delta\": \"<low|medium|high|unknown>\",\n",
        "    \"readability\": \"<improved|regressed|unchanged>\"\n",
        "  }\n",
        "}\n",
    ));

    out
}
