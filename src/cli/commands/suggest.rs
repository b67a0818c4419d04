use crate::cli::parser::Commands;
use crate::core::suggest::{advise, suggest};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Suggest { text } = cmd {
        let note = text.join(" ");
        let hint = suggest(&note);
        println!("💡 {}: {}", hint.kind.label(), hint.hint);

        let advice = advise(&note);
        for d in &advice.dos {
            println!("   ✔ {d}");
        }
        for d in &advice.donts {
            println!("   ✘ {d}");
        }
    }
    Ok(())
}
