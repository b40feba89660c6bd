use crate::{Message, Parameters, Prefix};

fn split2<'a>(s: &'a str, sep: &str) -> (&'a str, &'a str) {
    match s.split_once(sep) {
        Some((head, tail)) => (head, tail),
        None => (s, ""),
    }
}

// prefix ::= servername / ( nickname [ [ "!" user ] "@" host ] )
fn parse_prefix(l: &str) -> (Option<Prefix>, &str) {
    let Some(l) = l.strip_prefix(':') else {
        return (None, l);
    };

    let (mut head, tail) = split2(l, " ");
    let bang = head.find('!');
    let at = head.find('@');

    let mut prefix = Prefix::default();
    if let Some(at) = at {
        // the "@" only delimits a host when there is no "!" or the "!"
        // comes first; otherwise it belongs to the user part
        if bang.is_none_or(|bang| at > bang) {
            prefix.host = head[at + 1..].to_string();
            head = &head[..at];
        }
    }
    if let Some(bang) = bang {
        if bang > 0 {
            prefix.user = head[bang + 1..].to_string();
            head = &head[..bang];
        }
    }
    prefix.name = head.to_string();
    (Some(prefix), tail)
}

// params ::= *( SPACE middle ) [ SPACE ":" trailing ]
fn parse_params(l: &str) -> (Parameters, &str) {
    if l.is_empty() || l.starts_with(':') {
        return (Parameters::new(), l);
    }

    let (head, tail) = split2(l, " :");
    (head.split(' ').map(str::to_string).collect(), tail)
}

/// Parses one protocol line, without its line terminator, into a [`Message`].
///
/// Total over all inputs: malformed fragments degrade to a best-effort
/// message instead of an error. Framing is the transport's job; validation,
/// if wanted, is the caller's.
pub fn parse(line: &str) -> Message {
    let (prefix, l) = parse_prefix(line);
    let (command, l) = split2(l, " ");
    let (params, l) = parse_params(l);
    let text = l.strip_prefix(':').unwrap_or(l);

    Message {
        command: command.to_string(),
        params,
        prefix,
        text: text.to_string(),
        raw: line.to_string(),
    }
}
