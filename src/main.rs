use clap::{Arg, Command};
use eldarin::{
    Direction, Language, TranslatorEngine, languages, load_overlay_from_file,
};
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("eldarin")
        .version("0.1.0")
        .about("Rule-based translator between English and constructed languages")
        .arg(
            Arg::new("language")
                .help("Target language key (see --list)")
                .required_unless_present("list")
                .index(1),
        )
        .arg(
            Arg::new("direction")
                .help("encode: EN -> language, decode: language -> EN")
                .required_unless_present("list")
                .index(2),
        )
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required_unless_present("list")
                .index(3),
        )
        .arg(
            Arg::new("lexicon")
                .long("lexicon")
                .short('l')
                .help("JSON lexicon overlay file (default: $ELDARIN_LEXICON)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show each pipeline stage")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List registered languages and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list") {
        for language in languages::available() {
            let meta = language.meta();
            println!(
                "{:<10} {} ({}, {} lexicon entries)",
                meta.key,
                meta.name,
                meta.order,
                language.lexicon().len()
            );
        }
        return Ok(());
    }

    let language_key = matches.get_one::<String>("language").unwrap();
    let direction_arg = matches.get_one::<String>("direction").unwrap();
    let text = matches.get_one::<String>("text").unwrap();
    let verbose = matches.get_flag("verbose");

    if languages::get(language_key).is_none() {
        eprintln!("❌ Unknown language '{}'", language_key);
        eprintln!("   Usage: eldarin <language> <direction> <text>");
        eprintln!(
            "   Registered languages: {}",
            languages::available()
                .iter()
                .map(|l| l.meta().key)
                .collect::<Vec<_>>()
                .join(", ")
        );
        return Err(format!("unknown language '{}'", language_key).into());
    }

    let direction: Direction = match direction_arg.parse() {
        Ok(direction) => direction,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Usage: eldarin <language> <direction> <text>");
            return Err(e.into());
        }
    };

    // Optional lexicon overlay, from the flag or the environment
    let overlay_path = matches
        .get_one::<String>("lexicon")
        .cloned()
        .or_else(|| env::var("ELDARIN_LEXICON").ok());
    let overlay: Option<Box<dyn Language>> = match overlay_path {
        Some(path) => {
            let entries = load_overlay_from_file(Path::new(&path))?;
            if verbose {
                println!("📖 Merged {} overlay entries from {}", entries.len(), path);
            }
            Some(languages::create_with_overlay(language_key, entries)?)
        }
        None => None,
    };
    let engine = match &overlay {
        Some(language) => TranslatorEngine::new(language.as_ref()),
        None => TranslatorEngine::for_key(language_key)?,
    };

    if verbose {
        let meta = engine.language().meta();
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {} ({} order), direction: {}", meta.name, meta.order, direction);
        println!();
    }

    // 1. Tokenize and tag
    let words = eldarin::tokenize(text);
    let tokens = engine.pos_tag(&words);
    if verbose {
        println!("✅ Tagged {} tokens", tokens.len());
        for (i, tok) in tokens.iter().enumerate() {
            println!("   [{}] \"{}\" → {}/{}", i, tok.text, tok.lemma, tok.pos);
        }
        println!();
    }

    // 2. Syntax mapping
    let tokens = engine.language().syntax_map(tokens);
    if verbose {
        println!("🔀 Syntax-mapped order:");
        for (i, tok) in tokens.iter().enumerate() {
            println!("   [{}] {}/{} {:?}", i, tok.lemma, tok.pos, tok.feats);
        }
        println!();
    }

    // 3. Lemma translation
    let tokens = engine.translate_lemmas(&tokens, direction);
    if verbose {
        println!("🔁 Translated lemmas:");
        for (i, tok) in tokens.iter().enumerate() {
            println!("   [{}] {} ({})", i, tok.lemma, tok.lang);
        }
        println!();
    }

    // 4. Morphology
    let wordforms = engine.morph_generate(&tokens, direction);
    if verbose {
        println!("🔧 Inflected wordforms:");
        for (i, wf) in wordforms.iter().enumerate() {
            println!("   [{}] {} (from {})", i, wf.surface, wf.lemma);
        }
        println!();
    }

    // 5. Assembly
    println!("{}", engine.language().assemble(&wordforms));

    Ok(())
}
