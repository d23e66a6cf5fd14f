use crate::model::GenerationRequest;

/// Builds the single instruction string sent to the completion service.
///
/// The problem text is embedded verbatim between quote fences on their own
/// lines, see [`quote_fence`].
pub fn compose(req: &GenerationRequest) -> String {
    let names = req
        .effective_frameworks()
        .iter()
        .map(|f| f.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    let fence = quote_fence(req.problem());

    format!(
        "You are an expert consultant. Break down the following problem using the requested frameworks: {names}.\n\n\
         Problem:\n{fence}\n{problem}\n{fence}\n\n\
         For each framework requested, provide:\n\
         - A short explanation of the framework (1 line).\n\
         - A structured breakdown with numbered lists / bullet points.\n\
         - Exactly 3 practical next steps that the user can implement in the next 7 days.\n\n\
         Start each framework's section with a second-level markdown heading (`## <framework name>`).\n\
         Output in clear markdown. Tone: {tone}. Length: {length}. Keep sections labelled with the framework name.",
        problem = req.problem(),
        tone = req.tone,
        length = req.length,
    )
}

/// A run of double quotes, at least three long and longer than any run of
/// quotes inside `text`.
fn quote_fence(text: &str) -> String {
    let longest = text
        .split(|c: char| c != '"')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "\"".repeat(longest.max(2) + 1)
}
