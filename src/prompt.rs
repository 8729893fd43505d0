//! Ghibli prompt template.

/// Builds the generation prompt around a vision-model description.
///
/// Pure string assembly: fixed style preamble, the description verbatim, and a
/// closing clause anchoring the style to well-known Ghibli films.
pub fn compose_ghibli_prompt(description: &str) -> String {
    format!(
        "Generate a 2D Studio Ghibli-style illustration with warm pastel colors, \
         expressive faces, and vivid backgrounds. The image should reflect the \
         following details with high accuracy: {}. Ensure that the scene captures \
         the magic, warmth, and rich details found in Ghibli films like \
         'My Neighbor Totoro', 'Spirited Away', and 'Howl's Moving Castle'.",
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_embedded_verbatim() {
        let description = "An elderly fisherman mending a net at dawn";
        let prompt = compose_ghibli_prompt(description);

        assert!(prompt.contains(description));
        assert!(prompt.starts_with("Generate a 2D Studio Ghibli-style illustration"));
    }

    #[test]
    fn test_anchor_films_named() {
        let prompt = compose_ghibli_prompt("a cat");

        assert!(prompt.contains("'My Neighbor Totoro'"));
        assert!(prompt.contains("'Spirited Away'"));
        assert!(prompt.contains("'Howl's Moving Castle'"));
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let description = "A bakery on a cobblestone street, steam in the window";
        assert_eq!(
            compose_ghibli_prompt(description),
            compose_ghibli_prompt(description)
        );
    }

    #[test]
    fn test_empty_description_still_composes() {
        let prompt = compose_ghibli_prompt("");
        assert!(prompt.contains("high accuracy: ."));
    }
}
