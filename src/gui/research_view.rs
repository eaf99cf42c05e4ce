//! Research & Methodology View
//! Static links to the upstream methodology write-up and research threads.

use egui::{RichText, Ui};

pub fn show(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.heading("Research & Methodology");
    });
    ui.add_space(10.0);

    ui.label("Learn more about the methodology behind quantifying pitch tunneling:");
    ui.add_space(5.0);
    ui.hyperlink_to(
        "The Science of Pitch Tunneling: Quantifying Arsenal Interaction Effects \
         through Kernel Density Estimation, XGBoost, and SHAP",
        "https://medium.com/@maxwellresnick/quantifying-pitch-tunneling-acc0cfcdff02",
    );

    ui.add_space(15.0);
    ui.label(RichText::new("Research threads:").strong());
    ui.add_space(5.0);

    for (title, url) in [
        (
            "Quantifying Pitch Tunneling Thread",
            "https://x.com/MaxwellResnick/status/1861500450274431044",
        ),
        (
            "Joe Ryan vs. Spencer Arrighetti",
            "https://x.com/MaxwellResnick/status/1862652688816595067",
        ),
        (
            "Do Sweepers Tunnel?",
            "https://x.com/MaxwellResnick/status/1864374760936759301",
        ),
        (
            "Does Effectively Wild Exist?",
            "https://x.com/MaxwellResnick/status/1862209303861473322",
        ),
        (
            "Felix Bautista's Otherworldly Splitter",
            "https://x.com/MaxwellResnick/status/1864414376775831860",
        ),
        (
            "Logan Webb's Sneaky Four-Seamer",
            "https://x.com/MaxwellResnick/status/1861113179843019107",
        ),
    ] {
        ui.horizontal(|ui| {
            ui.label("-");
            ui.hyperlink_to(title, url);
        });
    }
}
