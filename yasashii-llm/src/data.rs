//! Built-in prompt material: the system preamble, the guideline rules, worked
//! examples in bracket-furigana form, and sample inputs for the UI.
//!
//! The rules follow the Agency for Cultural Affairs guideline on yasashii
//! nihongo for residence support (在留支援のためのやさしい日本語ガイドライン).

use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "あなたは、日本に住む外国人のために、行政や生活の文章を「やさしい日本語」に書き換える専門家です。
文化庁「在留支援のためのやさしい日本語ガイドライン」に従って、意味を変えずに、短く、わかりやすい文章にしてください。
漢字には、読み方を半角のカッコとひらがなで付けてください。例: 在留(ざいりゅう)カード、市役所(しやくしょ)
変換した文章だけを出力してください。説明や前置きは書かないでください。";

pub const GUIDELINE_RULES: &str = "【やさしい日本語のルール】
1. 一つの文を短くします（20〜30文字くらい）。
2. 一つの文で、一つのことだけを伝えます。
3. 難しい言葉は、簡単な言葉に変えます。
4. 尊敬語や謙譲語は使いません。「です」「ます」で書きます。
5. 二重否定（〜しないわけではない など）は使いません。
6. 大切なことは、箇条書き（・）で書きます。
7. 日付、時間、場所は、はっきり書きます。数字は算用数字（1、2、3）で書きます。
8. 変えられない言葉（在留カード など）は、そのまま使って、後ろに全角のカッコ（ ）で説明を書きます。
9. 漢字には、すぐ後ろに半角のカッコ ( ) でひらがなの読み方を付けます。例: 手続(てつづ)き
10. 読み方のカッコの中には、ひらがなだけを書きます。カタカナやローマ字は書きません。";

/// One worked rewrite shown to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FewShotExample {
    pub original: String,
    pub yasashii: String,
}

impl FewShotExample {
    pub fn new(original: impl Into<String>, yasashii: impl Into<String>) -> Self {
        FewShotExample {
            original: original.into(),
            yasashii: yasashii.into(),
        }
    }
}

const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    (
        "新規の上陸許可を受けて日本に入国した場合、在留カードが交付された方は、住所を定めた日から14日以内に、在留カードをお持ちになってお住まいの市町村において転入の届出をする必要があります。",
        "日本に入った人で、在留(ざいりゅう)カード（外国人が持つカード）をもらった人は、次のことをしてください。

・住む場所を決めます
・決めた日から14日以内に手続(てつづ)きをします
・在留(ざいりゅう)カードを持って、市役所(しやくしょ)か区役所(くやくしょ)に行きます
・「転入届(てんにゅうとどけ)」という紙を出します",
    ),
    (
        "地震が発生した場合は、速やかに机の下などに身を隠し、揺れが収まるまで待機してください。",
        "地震(じしん)が起(お)きたら、すぐに机(つくえ)の下(した)に入(はい)ってください。
揺(ゆ)れが止(と)まるまで、待(ま)ってください。",
    ),
    (
        "発熱等の症状がある場合は、医療機関を受診する前に、まず電話で相談してください。",
        "熱(ねつ)があるときは、病院(びょういん)に行(い)く前(まえ)に、電話(でんわ)をしてください。",
    ),
    (
        "燃えるごみは、指定された曜日の午前8時までに、所定の集積所に出してください。",
        "燃(も)えるごみは、決(き)められた日(ひ)の朝(あさ)8時(じ)までに出(だ)してください。
ごみを出(だ)す場所(ばしょ)は決(き)まっています。",
    ),
    (
        "国民健康保険料の納付期限を過ぎますと、延滞金が加算される場合がございます。",
        "国民健康保険(こくみんけんこうほけん)のお金(かね)は、決(き)められた日(ひ)までに払(はら)ってください。
遅(おく)れると、もっとたくさんお金(かね)を払(はら)います。",
    ),
    (
        "避難勧告が発令された地域にお住まいの方は、直ちに最寄りの避難所へ避難してください。",
        "逃(に)げてくださいという知(し)らせが出(で)ました。
すぐに近(ちか)くの避難所(ひなんじょ)（逃(に)げる場所(ばしょ)）に行(い)ってください。",
    ),
    (
        "お子様の就学に関する手続きは、教育委員会にて承っております。",
        "子(こ)どもが学校(がっこう)に入(はい)る手続(てつづ)きは、教育委員会(きょういくいいんかい)でします。",
    ),
    (
        "診察をご希望の方は、事前にお電話にてご予約いただきますようお願い申し上げます。",
        "病院(びょういん)で診(み)てもらいたい人(ひと)は、先(さき)に電話(でんわ)で予約(よやく)をしてください。",
    ),
];

pub fn default_examples() -> Vec<FewShotExample> {
    FEW_SHOT_EXAMPLES
        .iter()
        .map(|(original, yasashii)| FewShotExample::new(*original, *yasashii))
        .collect()
}

/// A ready-made input for the "try a sample" buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleText {
    pub category: &'static str,
    pub text: &'static str,
}

pub const SAMPLE_TEXTS: &[SampleText] = &[
    SampleText {
        category: "在留手続き",
        text: "在留期間の更新を希望される方は、在留期間の満了する日の3か月前から満了する日までに、住居地を管轄する地方出入国在留管理官署において申請を行ってください。",
    },
    SampleText {
        category: "防災",
        text: "大雨警報が発表された際には、河川の増水や土砂災害に十分警戒し、自治体からの避難情報に従って速やかに行動してください。",
    },
    SampleText {
        category: "医療",
        text: "夜間や休日に急病になった場合は、休日夜間急患センターを受診するか、救急安心センター事業（#7119）に電話で相談することができます。",
    },
    SampleText {
        category: "ごみ",
        text: "資源ごみの収集は毎月第2・第4水曜日となっておりますので、缶・びん・ペットボトルは分別のうえ、中身を洗ってから排出してください。",
    },
    SampleText {
        category: "税金",
        text: "前年の所得に基づき算定された住民税の納税通知書を6月中旬に送付いたしますので、納期限までに金融機関またはコンビニエンスストアにて納付してください。",
    },
];
