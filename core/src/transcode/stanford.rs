use crate::error::ParseError;
use crate::segment::Block;

use super::types::{Dependency, Token, TweetParse};

/// Gloss for governor index -1: the token is outside the dependency tree.
pub const UNATTACHED_GLOSS: &str = "$$NAN$$";

/// Gloss and coerced relation label for governor index 0.
const ROOT_GLOSS: &str = "ROOT";

/// Graph rendering of one block: a token table plus resolved dependency
/// edges. `index` is the 0-based position of the tweet in the request.
pub fn block_to_stanford(block: &Block, index: usize) -> Result<TweetParse, ParseError> {
    let lines = match block {
        Block::Empty => return Ok(TweetParse::empty(index)),
        Block::Lines(lines) => lines,
    };

    // First pass: token table, used below to resolve glosses.
    let mut tokens = Vec::with_capacity(lines.len());
    for line in lines {
        let fields = split_fields(line)?;
        let word = fields[1].trim().to_string();
        tokens.push(Token {
            index: int_field(line, fields[0], "token index")?,
            original_text: word.clone(),
            word,
            pos: fields[4].to_string(),
        });
    }

    // Second pass: edges. Governor 0 forces the relation label to ROOT no
    // matter what the engine wrote in column 7.
    let mut basic_dependencies = Vec::with_capacity(lines.len());
    for line in lines {
        let fields = split_fields(line)?;
        let governor = int_field(line, fields[6], "governor index")?;
        let dependent = int_field(line, fields[0], "token index")?;
        let dep = if governor == 0 {
            ROOT_GLOSS.to_string()
        } else {
            fields[7].to_string()
        };
        basic_dependencies.push(Dependency {
            dep,
            governor,
            governor_gloss: resolve_gloss(governor, &tokens)?,
            dependent,
            dependent_gloss: resolve_gloss(dependent, &tokens)?,
        });
    }

    Ok(TweetParse {
        index,
        tokens,
        basic_dependencies,
    })
}

/// Look up the surface word for a token index within the same block.
/// 0 is the synthetic ROOT node and -1 marks an unattached token; any other
/// index missing from the table means the engine broke its own numbering.
fn resolve_gloss(index: i64, tokens: &[Token]) -> Result<String, ParseError> {
    if index == 0 {
        return Ok(ROOT_GLOSS.to_string());
    }
    if index == -1 {
        return Ok(UNATTACHED_GLOSS.to_string());
    }
    tokens
        .iter()
        .find(|token| token.index == index)
        .map(|token| token.word.clone())
        .ok_or(ParseError::UnknownGovernor {
            index,
            tokens: tokens.len(),
        })
}

fn split_fields(line: &str) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 8 {
        return Err(ParseError::malformed_line(
            line,
            format!("expected at least 8 tab-delimited fields, found {}", fields.len()),
        ));
    }
    Ok(fields)
}

fn int_field(line: &str, field: &str, what: &str) -> Result<i64, ParseError> {
    field
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::malformed_line(line, format!("{what} `{field}` is not an integer")))
}
