//! Built-in sample dataset
//!
//! A hardcoded art-history essay used by the `sample` subcommand to produce
//! a document without any input file.

use essayfmt_ast::{EssayRecord, PaperMode};

/// Build the built-in sample essay record
pub fn sample_record(mode: PaperMode) -> EssayRecord {
    EssayRecord {
        title: "Giotto di Bondone and the Development of Renaissance Painting: \
                Narrative Tradition and Naturalism as Didactic Tools"
            .to_string(),
        author: "Tyler B Gibbs".to_string(),
        institution: "University of Oklahoma".to_string(),
        course: "Course Number: LSTD 3173-501".to_string(),
        instructor: "Allison Palmer".to_string(),
        due_date: "June 17, 2024".to_string(),
        abstract_text: "This essay explores the significant contributions of Giotto di Bondone \
                        to the development of Renaissance painting, focusing on his innovative \
                        narrative techniques and naturalistic style. By analyzing key works such \
                        as the Scrovegni Chapel frescoes and the Ognissanti Madonna, it \
                        demonstrates how Giotto's innovations in spatial depth, humanization of \
                        religious figures, and emotional expressiveness laid the foundation for \
                        the artistic developments of the Renaissance."
            .to_string(),
        keywords: vec![
            "Giotto di Bondone".to_string(),
            "Renaissance painting".to_string(),
            "narrative tradition".to_string(),
            "naturalism".to_string(),
            "didactic art".to_string(),
        ],
        content: "\
Giotto di Bondone and the Development of Renaissance Painting
Giotto di Bondone, a pivotal figure in the Early Renaissance of Italy, played a crucial role in developing what came to be known as the Renaissance style of painting. His innovative approach to art marked a significant departure from the Byzantine style that had dominated European art for centuries.
The Narrative Tradition in Giotto's Work
Giotto's approach to narrative painting revolutionized the way religious stories were depicted and understood by viewers. His paintings told stories through dynamic compositions and emotionally expressive figures, well suited to the didactic needs of the Church.
His key innovations include:
- Spatial depth and rudimentary perspective, grounding figures in a relatable physical reality
- Humanization of religious figures with recognizable emotions
- Emotional expressiveness that let viewers empathize with the stories being told
Giotto's Influence on Renaissance Art
Giotto's innovations laid the groundwork for the artistic developments that would characterize the Renaissance. Later artists, such as Masaccio and Fra Angelico, built upon his foundations, further developing techniques of perspective and naturalism.
Conclusion
By bridging the gap between the stylized forms of Byzantine art and the more realistic representations of the High Renaissance, Giotto played a crucial role in shaping the course of Western art history."
            .to_string(),
        references: vec![
            "Adams, L. S. (2013). Italian Renaissance Art. Westview Press.".to_string(),
            "Labatt, A., & Appleyard, C. (2004). Mendicant Orders in the Medieval World. \
             The Metropolitan Museum of Art. http://www.metmuseum.org/toah/hd/mend/hd_mend.htm"
                .to_string(),
            "Zucker, S., & Harris, B. (2015, December 11). Cimabue, Santa Trinita Madonna \
             and Child Enthroned. In Smarthistory. https://smarthistory.org/cimabue-santa-trinita-madonna"
                .to_string(),
            "Zucker, S., & Harris, B. (2020, November 23). Giotto, The Ognissanti Madonna \
             and Child Enthroned. In Smarthistory. https://smarthistory.org/giotto-the-ognissanti-madonna/"
                .to_string(),
        ],
        mode,
    }
}
