//! The LBW instruction prompt and the chat message that carries it.

use crate::image::ImageInput;
use serde::Serialize;

/// Fixed instructions sent with every image.
///
/// Describes the three LBW zones, the checks to apply, and the bare JSON
/// object the model must answer with. Sent byte-for-byte as written,
/// indentation and doubled braces included.
pub const LBW_INSTRUCTIONS: &str = r#"
    You are an expert in cricket tasked to judge whether a batter is out by Leg Before Wicket (LBW). You will be presented with an image of the ball hitting a batter's pads and you will have to make a decision whether the batter is to be judged out or not applying the following rules. 

    There are three important zones to consider  while making your decision. 
    - Pitching Zone: The Pitching Zone is the two-dimensional area that spans the length of the pitch, with the outer edges of the stumps at each end acting as its boundaries. 
    - Impact Zone: The Impact Zone is where the ball hits the batter’s pad for the first time. It is a three-dimensional area spaced between both sets of stumps, from ground level to an indefinite height. The outer edge of the leg and off stump act as its outer boundaries.
    - Wicket Zone: The Wicket Zone is a two-dimensional space, with the stumps, from their base to the top of the bails, and the full width from the outer edge of the off and leg stumps, bounding the area. 

    Given the image, you will need to project its trajectory between the impact zone and wicket zone. If you conclude that the ball will end up in the wicket zone, the batter needs to be adjudged "Out". If you conclude that the ball will end up outside the wicket zone, the batter needs to be adjudged "Not Out".  Specifically, you should check that:
    - The ball pitches in line between the wicket and wicket or on the off side of the batters wicket (i.e., the ball should be in the pitching zone or on the off side of the batter's wicket)
    - The batter intercepts the ball with any part of their body, except their hands, either full-pitch or after pitching (i.e., the impact zone should be within the leg and off stump)
    - The point of impact is between wicket and wicket, even if above the level of the bails (i.e., it should be in the wicket zone)

    Present your final answer as a JSON object with the following structure:
    {{
    "decision": out or not out
    "reason": detailed explanation of which rules were applied and why the decision was made
    }}

    Do not output anything before or after the JSON.
    "#;

/// One turn of a chat-completion conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ChatContent>,
}

/// A typed part of a multimodal message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ChatContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Build the single user message asking for an LBW ruling on `image`.
pub fn build_message(image: &ImageInput) -> ChatMessage {
    ChatMessage {
        role: "user".to_string(),
        content: vec![
            ChatContent::Text {
                text: LBW_INSTRUCTIONS.to_string(),
            },
            ChatContent::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_uri(),
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction_text(message: &ChatMessage) -> &str {
        match &message.content[0] {
            ChatContent::Text { text } => text,
            other => panic!("expected text part first, got {other:?}"),
        }
    }

    #[test]
    fn test_message_has_text_then_image() {
        let image = ImageInput::from_bytes(&[1, 2, 3]);
        let message = build_message(&image);

        assert_eq!(message.role, "user");
        assert_eq!(message.content.len(), 2);
        assert_eq!(instruction_text(&message), LBW_INSTRUCTIONS);
        match &message.content[1] {
            ChatContent::ImageUrl { image_url } => assert_eq!(image_url.url, image.data_uri()),
            other => panic!("expected image part second, got {other:?}"),
        }
    }

    #[test]
    fn test_instructions_do_not_depend_on_image() {
        let a = build_message(&ImageInput::from_bytes(&[1, 2, 3]));
        let b = build_message(&ImageInput::from_bytes(&[9; 64]));
        assert_eq!(instruction_text(&a), instruction_text(&b));
    }

    #[test]
    fn test_instructions_text_is_pinned() {
        assert_eq!(LBW_INSTRUCTIONS.len(), 2165);
        assert!(LBW_INSTRUCTIONS.starts_with("\n    You are an expert in cricket"));
        assert!(LBW_INSTRUCTIONS.ends_with("Do not output anything before or after the JSON.\n    "));
        assert!(LBW_INSTRUCTIONS.contains("three important zones to consider  while making"));
        assert!(LBW_INSTRUCTIONS.contains("adjudged \"Not Out\".  Specifically"));
        assert!(LBW_INSTRUCTIONS.contains(
            "    {{\n    \"decision\": out or not out\n    \"reason\": detailed explanation"
        ));
        assert!(LBW_INSTRUCTIONS.contains("why the decision was made\n    }}\n"));
        assert!(LBW_INSTRUCTIONS.contains("applying the following rules. \n"));
    }

    #[test]
    fn test_message_wire_shape() {
        let message = build_message(&ImageInput::from_bytes(&[0xAB]));
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(
            json["content"][1]["image_url"]["url"],
            "data:image/png;base64,qw=="
        );
    }
}
