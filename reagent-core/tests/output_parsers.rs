use reagent_core::{AgentStep, LlmResponse, ReActOutputParser, ReagentError, Runnable};

#[tokio::test]
async fn parses_action_and_input() {
    let parser = ReActOutputParser::new();
    let text = "I should count the characters.\nAction: text_length\nAction Input: \"DOG\""
        .to_string();

    let step = Runnable::<String, AgentStep>::invoke(&parser, text.clone())
        .await
        .expect("parse");

    match step {
        AgentStep::Action(action) => {
            assert_eq!(action.tool, "text_length");
            assert_eq!(action.tool_input, "DOG");
            assert_eq!(action.log, text);
        }
        other => panic!("expected action, got {other:?}"),
    }
}

#[tokio::test]
async fn parses_numbered_action_markers() {
    let parser = ReActOutputParser::new();
    let text = "Thought: count it\nAction 1: text_length\nAction 1 Input: DOG".to_string();

    let step = Runnable::<String, AgentStep>::invoke(&parser, text)
        .await
        .expect("parse");

    match step {
        AgentStep::Action(action) => {
            assert_eq!(action.tool, "text_length");
            assert_eq!(action.tool_input, "DOG");
        }
        other => panic!("expected action, got {other:?}"),
    }
}

#[tokio::test]
async fn parses_final_answer() {
    let parser = ReActOutputParser::new();
    let text = "I now know the final answer.\nFinal Answer: 3".to_string();

    let step = Runnable::<String, AgentStep>::invoke(&parser, text)
        .await
        .expect("parse");

    match step {
        AgentStep::Finish(finish) => {
            assert_eq!(
                finish.return_values.get("output").and_then(|v| v.as_str()),
                Some("3")
            );
        }
        other => panic!("expected finish, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_output_with_both_action_and_answer() {
    let parser = ReActOutputParser::new();
    let text = "Action: text_length\nAction Input: DOG\nFinal Answer: 3".to_string();

    let err = Runnable::<String, AgentStep>::invoke(&parser, text)
        .await
        .expect_err("ambiguous output must not parse");

    assert!(matches!(err, ReagentError::ParseFailed { .. }));
}

#[tokio::test]
async fn rejects_output_without_action_or_answer() {
    let parser = ReActOutputParser::new();

    let err = Runnable::<String, AgentStep>::invoke(&parser, "just musing out loud".to_string())
        .await
        .expect_err("free text must not parse");

    match err {
        ReagentError::ParseFailed { output, reason } => {
            assert_eq!(output, "just musing out loud");
            assert!(reason.contains("Action:"));
        }
        other => panic!("expected parse failure, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_action_without_input() {
    let parser = ReActOutputParser::new();

    let err =
        Runnable::<String, AgentStep>::invoke(&parser, "Action: text_length".to_string())
            .await
            .expect_err("action without input must not parse");

    match err {
        ReagentError::ParseFailed { reason, .. } => {
            assert!(reason.contains("Action Input:"));
        }
        other => panic!("expected parse failure, got {other:?}"),
    }
}

#[tokio::test]
async fn parses_llm_response_content() {
    let parser = ReActOutputParser::new();
    let response = LlmResponse {
        content: "Final Answer: done".to_string(),
    };

    let step = Runnable::<LlmResponse, AgentStep>::invoke(&parser, response)
        .await
        .expect("parse");

    assert!(matches!(step, AgentStep::Finish(_)));
}
