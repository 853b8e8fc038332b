// Disclosure Statement
// Journal-ready declaration of AI tool usage

pub const GENERIC_TOOLS_PHRASE: &str = "AI writing assistance tools";

pub fn generate_disclosure<S: AsRef<str>>(tools: &[S], purpose: &str) -> String {
    let tools_text = if tools.is_empty() {
        GENERIC_TOOLS_PHRASE.to_string()
    } else {
        tools
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut disclosure = format!(
        "AI Disclosure Statement\n\nThe authors acknowledge the use of {} for {}. ",
        tools_text, purpose
    );
    disclosure.push_str(
        "The authors take full responsibility for the content of this publication and confirm \
         that all AI-generated suggestions were reviewed, validated, and integrated appropriately. ",
    );
    disclosure.push_str(
        "The final manuscript reflects the authors' original research, analysis, and conclusions. ",
    );
    disclosure.push_str(
        "All uses of AI tools comply with the ethical guidelines and policies of the submitting journal.",
    );
    disclosure
}
