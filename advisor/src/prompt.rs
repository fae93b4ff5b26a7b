use indoc::{formatdoc, indoc};

use crate::{
    message::{Message, Role},
    pinecone::ProfessorMatch,
};

/// Static behavioral instructions for the assistant. Swappable configuration,
/// not logic: nothing in the pipeline depends on its wording.
pub const SYSTEM_PROMPT: &str = indoc! {"
    You are an AI assistant that helps students find professors based on their
    queries, using a Rate My Professor review database. For each user query, the
    top 3 most relevant professor reviews are retrieved automatically and
    appended to the message; base your recommendations on them.

    Structure each response as follows:

    1. A brief acknowledgment of the student's query.
    2. The top professor recommendations, each including the professor's name,
       department/subject, overall rating (out of 5 stars), and a brief summary
       of student feedback with any standout positive or negative points.
    3. A concise conclusion with general advice.

    Guidelines:

    - Maintain a neutral and informative tone, including both positive and
      negative feedback when relevant.
    - If the query is too broad or vague, ask for clarification.
    - If fewer than 3 relevant professors are available, explain this and
      provide as many as you can.
    - Don't invent or fabricate information. If you don't have enough data to
      answer a query, be honest about the limitations.
    - Don't share personal information about professors or students beyond
      what's typically found in public course reviews.
    - If asked about topics outside of professor recommendations, politely
      redirect the conversation to your primary function.
"};

const RESULTS_HEADER: &str = "\n\nReturned results from vector db (done automatically): ";

/// Appends the retrieved reviews to the query in a fixed template. With no
/// matches the header alone is appended.
#[must_use]
pub fn annotate(content: &str, matches: &[ProfessorMatch]) -> String {
    let mut annotated = format!("{content}{RESULTS_HEADER}");

    for record in matches {
        annotated.push_str(&formatdoc!(
            "

            Professor: {}
            Subject: {}
            Stars: {}
            ",
            record.id,
            record.metadata.subject,
            record.metadata.stars
        ));
    }

    annotated
}

/// Assembles the outbound conversation: the system prompt, the history in its
/// original order, and the final message reconstructed as a user turn with
/// the retrieved reviews spliced in.
#[must_use]
pub fn build_messages(
    history: Vec<Message>,
    last: Message,
    matches: &[ProfessorMatch],
) -> Vec<Message> {
    let mut outbound = Vec::with_capacity(history.len() + 2);

    outbound.push(Message::new(Role::System, SYSTEM_PROMPT));
    outbound.extend(history);
    outbound.push(Message::new(Role::User, annotate(&last.content, matches)));

    outbound
}
