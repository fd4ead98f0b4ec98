//! 集成测试 - 端到端词法分析测试

use brio_core::{
    BrioTokenKind, ErrorKind, Keyword, LexError, Lexer, LexerConfig, ReaderSource, StringSource,
    Token,
};
use brio_log::Logger;

/// 辅助函数：完整扫描输入，返回 token 序列（不含 EndOfInput）
fn lex_all(code: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::from_str(code);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        if token.is_end_of_input() {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

/// 辅助函数：kind 名与词素的序列（便于断言）
fn summarize(tokens: &[Token]) -> Vec<(String, String)> {
    tokens
        .iter()
        .map(|t| (t.kind.name().to_string(), t.lexeme.clone()))
        .collect()
}

#[test]
fn test_whitespace_only_input_yields_single_end_of_input() {
    let mut lexer = Lexer::from_str(" \t\n  \r\n ");

    let token = lexer.next_token().unwrap();
    assert!(token.is_end_of_input());
    assert!(token.lexeme.is_empty());

    // 再次调用仍然是 EndOfInput
    assert!(lexer.next_token().unwrap().is_end_of_input());
}

#[test]
fn test_complete_program() {
    let code = "func area(r);\nbegin\n  var a := r * r;\n  print a;\nend";
    let tokens = lex_all(code).unwrap();

    let summary = summarize(&tokens);
    let expected = [
        ("FUNC", "func"),
        ("ID", "area"),
        ("LPAREN", "("),
        ("ID", "r"),
        ("RPAREN", ")"),
        ("SEMI", ";"),
        ("BEGIN", "begin"),
        ("VAR", "var"),
        ("ID", "a"),
        ("ASSIGN", ":="),
        ("ID", "r"),
        ("OP", "*"),
        ("ID", "r"),
        ("SEMI", ";"),
        ("PRINT", "print"),
        ("ID", "a"),
        ("SEMI", ";"),
        ("END", "end"),
    ];

    assert_eq!(summary.len(), expected.len());
    for ((kind, lexeme), (want_kind, want_lexeme)) in summary.iter().zip(expected) {
        assert_eq!(kind, want_kind);
        assert_eq!(lexeme, want_lexeme);
    }
}

#[test]
fn test_keyword_precedence_over_identifier() {
    let tokens = lex_all("if iffy then elsewhere else").unwrap();

    assert_eq!(tokens[0].kind, BrioTokenKind::Keyword(Keyword::If));
    assert_eq!(tokens[1].kind, BrioTokenKind::Identifier);
    assert_eq!(tokens[2].kind, BrioTokenKind::Keyword(Keyword::Then));
    assert_eq!(tokens[3].kind, BrioTokenKind::Identifier);
    assert_eq!(tokens[4].kind, BrioTokenKind::Keyword(Keyword::Else));
}

#[test]
fn test_maximal_munch_identifier() {
    let tokens = lex_all("abc123_x9 ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, "abc123_x9");
}

#[test]
fn test_number_acceptance_boundaries() {
    // 接受
    assert_eq!(lex_all("3.14").unwrap()[0].lexeme, "3.14");
    assert_eq!(lex_all("12.5").unwrap()[0].lexeme, "12.5");
    assert_eq!(lex_all("0").unwrap()[0].lexeme, "0");

    // 拒绝：末尾小数点
    let err = lex_all("3.").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedNumber(ref l) if l == "3."));

    // 拒绝：裸小数点（符号分发处就是非法字符）
    let err = lex_all(".").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidChar('.')));

    // 拒绝："12..5" 的串止于第二个点，尾点检查报错
    let err = lex_all("12..5").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedNumber(ref l) if l == "12."));
}

#[test]
fn test_number_then_stray_dot() {
    // "3.1.4"：第一个 token 是 Number "3.1"，第二次调用在 '.' 上报错
    let mut lexer = Lexer::from_str("3.1.4");

    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind, BrioTokenKind::Number);
    assert_eq!(token.lexeme, "3.1");

    let err = lexer.next_token().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidChar('.')));
}

#[test]
fn test_two_char_operator_disambiguation() {
    for (input, lexeme) in [("<=", "<="), ("<>", "<>"), ("<", "<")] {
        let tokens = lex_all(input).unwrap();
        assert_eq!(tokens.len(), 1, "input {:?}", input);
        assert_eq!(tokens[0].kind, BrioTokenKind::RelOp);
        assert_eq!(tokens[0].lexeme, lexeme);
    }

    // 前瞻未命中时不吞掉后续字符
    let tokens = lex_all("<x").unwrap();
    assert_eq!(summarize(&tokens), [
        ("RELOP".to_string(), "<".to_string()),
        ("ID".to_string(), "x".to_string()),
    ]);
}

#[test]
fn test_no_seam_artifact_at_concatenation() {
    // 两段输入拼接后整体扫描，应等于两段各自 token 序列的连接，
    // 接缝处不产生空 token
    let head = "var x := 1;";
    let tail = "print x;";

    let combined = lex_all(&format!("{}{}", head, tail)).unwrap();
    let mut expected = lex_all(head).unwrap();
    expected.extend(lex_all(tail).unwrap());

    assert_eq!(summarize(&combined), summarize(&expected));
}

#[test]
fn test_final_position_matches_consumed_input() {
    let mut lexer = Lexer::from_str("var x;\nprint x;");
    while !lexer.next_token().unwrap().is_end_of_input() {}

    let pos = lexer.position();
    assert_eq!(pos.line, 2);
    // "print x;" 共 8 个字符，结束列为 9
    assert_eq!(pos.column, 9);
}

#[test]
fn test_token_stream_invariant_under_buffer_capacity() {
    // 双缓冲只是批处理策略：半区容量不得影响可观察行为
    let code = "begin var a1 := 10.5; if a1 <= 99 then print a1; end";

    let reference = lex_all(code).unwrap();
    for capacity in [1, 2, 3, 7, 10, 64] {
        let config = LexerConfig {
            buffer_capacity: capacity,
        };
        let mut lexer = Lexer::with_config(
            Box::new(StringSource::new(code)),
            &config,
            Logger::noop(),
        );

        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            if token.is_end_of_input() {
                break;
            }
            tokens.push(token);
        }

        assert_eq!(
            tokens, reference,
            "token stream changed at capacity {}",
            capacity
        );
    }
}

#[test]
fn test_reader_source_end_to_end() {
    let mut lexer = Lexer::new(Box::new(ReaderSource::new("int x := 7;".as_bytes())));

    let mut kinds = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        if token.is_end_of_input() {
            break;
        }
        kinds.push(token.kind);
    }

    assert_eq!(
        kinds,
        [
            BrioTokenKind::Keyword(Keyword::Int),
            BrioTokenKind::Identifier,
            BrioTokenKind::Assign,
            BrioTokenKind::Number,
            BrioTokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_error_position_reported() {
    let code = "var x := 1;\nvar y := 2 $ 3;";
    let err = lex_all(code).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidChar('$')));
    assert_eq!(err.line(), 2);
    // '$' 位于第 2 行第 12 列，消费后报告 13
    assert_eq!(err.column(), 13);
}

#[test]
fn test_nul_byte_terminates_input() {
    // 输入中的 NUL 与流结束等价
    let tokens = lex_all("var x\0; print").unwrap();
    assert_eq!(summarize(&tokens), [
        ("VAR".to_string(), "var".to_string()),
        ("ID".to_string(), "x".to_string()),
    ]);
}
