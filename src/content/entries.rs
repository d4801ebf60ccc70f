//! Authored vocabulary examples
//!
//! Ranks come from subtitle-corpus frequency analysis.

use super::catalog::{CatalogEntry, Category};

const fn entry(
    source_text: &'static str,
    reading: &'static str,
    translation_text: &'static str,
    frequency_rank: i32,
    explanation: &'static str,
) -> CatalogEntry {
    CatalogEntry {
        source_text,
        reading,
        translation_text,
        frequency_rank,
        explanation: Some(explanation),
    }
}

pub fn for_category(category: Category) -> &'static [CatalogEntry] {
    match category {
        Category::DailyLife => DAILY_LIFE,
        Category::Food => FOOD,
        Category::Casual => CASUAL,
        Category::Sumo => SUMO,
    }
}

pub const DAILY_LIFE: &[CatalogEntry] = &[
    entry("今日はコーヒーを飲む", "きょうはコーヒーをのむ", "Today I'm drinking coffee", 25,
        "今日 (kyou) is one of the most essential time words in Japanese. Unlike textbook phrases about libraries, this appears constantly in real conversation and anime."),
    entry("家で友達と会う", "いえでともだちとあう", "Meeting friends at home", 45,
        "家 (ie) means home/house and 友達 (tomodachi) is friend - both high-frequency words. The で particle shows location where the action happens."),
    entry("明日は仕事がある", "あしたはしごとがある", "Tomorrow I have work", 40,
        "明日 (ashita) tomorrow and 仕事 (shigoto) work are essential daily vocabulary. がある means 'to have/exist' for inanimate things like work."),
    entry("時間がない", "じかんがない", "There's no time", 30,
        "時間 (jikan) time is crucial vocabulary. がない is the negative form of がある - very common pattern you'll hear constantly in daily life."),
    entry("学校に行く", "がっこうにいく", "Going to school", 50,
        "学校 (gakkou) school and 行く (iku) to go are basic but essential. The に particle shows direction/destination - different from で (location of action)."),
    entry("昨日は暑かった", "きのうはあつかった", "Yesterday was hot", 35,
        "昨日 (kinou) yesterday and 暑い (atsui) hot. The かった ending makes past tense for i-adjectives - key grammar pattern."),
    entry("お金を使う", "おかねをつかう", "Using money", 92,
        "お金 (okane) money and 使う (tsukau) to use. The を particle marks what you're using - essential particle for object of action."),
    entry("天気がいい", "てんきがいい", "The weather is good", 135,
        "天気 (tenki) weather is practical daily vocabulary. いい (good) is more casual than よい - you'll hear いい much more in conversation."),
    entry("雨が降る", "あめがふる", "It's raining", 140,
        "雨 (ame) rain and 降る (furu) to fall. This is the natural way to say 'it's raining' in Japanese - rain falls rather than 'it rains'."),
    entry("寒い日だ", "さむいひだ", "It's a cold day", 150,
        "寒い (samui) cold and 日 (hi) day. Simple but useful weather expression. だ is the casual form of です."),
];

pub const FOOD: &[CatalogEntry] = &[
    entry("この料理は美味しい", "このりょうりはおいしい", "This food is delicious", 75,
        "料理 (ryouri) cooking/cuisine and 美味しい (oishii) delicious are essential for food conversations. You'll hear these constantly in food anime and restaurant scenes."),
    entry("レストランで食べる", "レストランでたべる", "Eating at a restaurant", 85,
        "レストラン (resutoran) restaurant and 食べる (taberu) to eat. The で particle shows where the eating happens - key pattern for location of actions."),
    entry("コーヒーを買う", "コーヒーをかう", "Buying coffee", 90,
        "コーヒー (koohii) coffee appears frequently in daily conversation. 買う (kau) to buy with を particle marking what you're purchasing."),
    entry("お茶を飲む", "おちゃをのむ", "Drinking tea", 95,
        "お茶 (ocha) tea is fundamental Japanese beverage vocabulary. 飲む (nomu) to drink is one of the most essential verbs for food and beverages."),
    entry("ご飯を作る", "ごはんをつくる", "Making rice/meal", 100,
        "ご飯 (gohan) means both rice and meal - culturally important word. 作る (tsukuru) to make is key cooking vocabulary you'll need for kitchen scenes."),
    entry("パンが好き", "パンがすき", "I like bread", 105,
        "パン (pan) bread from Portuguese. 好き (suki) to like uses が particle, not を - important grammar distinction for preferences."),
    entry("肉を食べる", "にくをたべる", "Eating meat", 110,
        "肉 (niku) meat is basic food vocabulary. Simple pattern: [food]を食べる is how you say eating specific foods in Japanese."),
    entry("店で買い物", "みせでかいもの", "Shopping at the store", 87,
        "店 (mise) store and 買い物 (kaimono) shopping. で particle for location again - pattern you'll use for any activity at a place."),
    entry("安いレストラン", "やすいレストラン", "Cheap restaurant", 97,
        "安い (yasui) cheap is essential for budget discussions. Adjectives come before nouns in Japanese, unlike English order."),
    entry("高い料理", "たかいりょうり", "Expensive food", 102,
        "高い (takai) expensive/high. In restaurant contexts, definitely means expensive. Same adjective-noun pattern as 安いレストラン."),
];

pub const CASUAL: &[CatalogEntry] = &[
    entry("やばい美味しい！", "やばいおいしい！", "So delicious!", 47,
        "やばい (yabai) ranks #47 in anime subtitles but is barely taught in textbooks. Originally meant 'dangerous' but now means 'awesome' or 'terrible' depending on context. Essential for understanding casual Japanese."),
    entry("すごいね！", "すごいね！", "That's amazing!", 52,
        "すごい (sugoi) is one of the most useful casual expressions. The ね particle adds emphasis and seeks agreement - like 'right?' in English. You'll hear this constantly in anime."),
    entry("大丈夫？", "だいじょうぶ？", "Are you okay?", 57,
        "大丈夫 (daijoubu) is incredibly versatile - means OK, alright, fine, or no problem. Rising intonation (？) makes it a question. Essential for daily conversation."),
    entry("ちょっと待って", "ちょっとまって", "Wait a little", 62,
        "ちょっと (chotto) means 'a little' but also 'wait' or 'excuse me'. て form (待って) is casual imperative. Much more natural than textbook 待ちなさい."),
    entry("本当にすごい", "ほんとうにすごい", "Really amazing", 67,
        "本当に (hontou ni) really/truly for emphasis. Often shortened to ほんと (honto) in casual speech. Combined with すごい for strong positive reaction."),
    entry("多分大丈夫", "たぶんだいじょうぶ", "Probably okay", 72,
        "多分 (tabun) probably/maybe expresses uncertainty politely. Combined with 大丈夫 for reassurance. Very common pattern in everyday conversation."),
    entry("全然わからない", "ぜんぜんわからない", "Don't understand at all", 77,
        "全然 (zenzen) not at all, completely. Originally only used with negatives but now used with positives too in casual speech. わからない is the plain negative of わかる."),
    entry("めちゃくちゃ面白い", "めちゃくちゃおもしろい", "Extremely interesting", 120,
        "めちゃくちゃ (mechakucha) extremely/ridiculously. Much more casual than とても or 非常に. Essential intensifier for casual conversation and anime."),
    entry("やばいって！", "やばいって！", "No way!", 47,
        "って is casual form of と言う (to say). やばいって literally means 'I'm telling you it's crazy!' Express disbelief or emphasis. Pure casual speech."),
    entry("すごく好き", "すごくすき", "Really like it", 52,
        "すごく is adverb form of すごい, meaning 'very' or 'really'. More casual than とても. 好き uses が particle (すごく好きだ), not を."),
];

pub const SUMO: &[CatalogEntry] = &[
    entry("勝負の行方", "しょうぶのゆくえ", "The outcome of the match", 18,
        "勝負 (shoubu) means match/contest - appears in many sports contexts. 行方 (yukue) means direction/outcome. Used for dramatic effect in close tournament races."),
    entry("場所の千秋楽を見る", "ばしょのせんしゅうらくをみる", "Watching the final day of the tournament", 19,
        "場所 (basho) is a sumo tournament held 6 times yearly. 千秋楽 (senshuuraku) is the final day when championships are decided. Essential for following sumo seasons."),
    entry("優勝争いが激しい", "ゆうしょうあらそいがはげしい", "The championship race is intense", 42,
        "優勝 (yuushou) championship is decided by most wins in 15-day tournament. 争い (arasoi) means competition/struggle. Final days often have multiple wrestlers tied for lead."),
    entry("この力士はすごい", "このりきしはすごい", "This wrestler is amazing", 52,
        "力士 (rikishi) means sumo wrestler - literally 'strength gentleman'. The kanji shows the cultural respect for wrestlers as skilled athletes, not just big guys."),
    entry("今日の相撲は面白い", "きょうのすもうはおもしろい", "Today's sumo is interesting", 200,
        "相撲 (sumou) is Japan's national sport with 1,500+ year history. 面白い (omoshiroi) interesting is high-frequency adjective. Essential vocabulary for sumo anime like Hinomaru Sumo."),
    entry("叩き込みで決まった", "はたきこみできまった", "Decided by slap down", 220,
        "叩き込み (hatakikomi) slap down involves hitting opponent's shoulder/back to make them fall forward. Quick technique often used against charging opponents."),
    entry("勝ち越しおめでとう", "かちこしおめでとう", "Congratulations on your winning record", 230,
        "勝ち越し (kachikoshi) winning record means more wins than losses in a tournament. Needed for promotion. Opposite is 負け越し (makekoshi) losing record."),
    entry("本場所が始まった", "ほんばしょがはじまった", "The grand tournament has begun", 240,
        "本場所 (honbasho) refers to the 6 official tournaments yearly (vs exhibitions). Each lasts 15 days with wrestlers fighting once daily. The heart of professional sumo."),
    entry("押し出しで勝利", "おしだしでしょうり", "Victory by push out", 250,
        "押し出し (oshidashi) is frontal push out - second most common winning technique. Push opponent out without grabbing their belt. Pure power technique."),
    entry("立合いが重要だ", "たちあいがじゅうようだ", "The initial charge is important", 260,
        "立合い (tachiai) initial charge when both wrestlers' hands touch ground simultaneously. Often determines match outcome in seconds. Requires perfect timing and strategy."),
    entry("上手投げは難しい", "うわてなげはむずかしい", "Overarm throw is difficult", 270,
        "上手投げ (uwatenage) overarm throw requires grabbing opponent's belt over their arm and throwing them down. Technical skill technique requiring timing and leverage."),
    entry("金星を取った！", "きんぼしをとった！", "Got a gold star!", 280,
        "金星 (kinboshi) gold star is awarded when a lower-ranked wrestler defeats a yokozuna. It provides permanent salary bonus and is considered a career highlight."),
    entry("廻しを掴む", "まわしをつかむ", "Grabbing the mawashi", 290,
        "廻し (mawashi) is the belt/loincloth wrestlers wear. Grabbing it enables throws and force-outs. Good belt grip position is crucial for grappling-style sumo."),
    entry("横綱の寄り切りが美しい", "よこづなのよりきりがうつくしい", "The yokozuna's yorikiri is beautiful", 300,
        "横綱 (yokozuna) is the highest rank in sumo - grand champion. 寄り切り (yorikiri) is the most common winning technique: grabbing opponent's belt and forcing them out of the ring."),
    entry("大関の相撲", "おおぜきのすもう", "The ozeki's sumo", 310,
        "大関 (oozeki) is the second-highest rank below yokozuna. Must maintain high winning percentage or face demotion. Only 2-3 ozeki typically active at once."),
    entry("関脇の頑張り", "せきわけのがんばり", "The sekiwake's effort", 320,
        "関脇 (sekiwake) is third-highest rank in sumo. 頑張り (ganbari) means effort/perseverance - valued trait in sumo culture. Sekiwake can be promoted to ozeki with strong performance."),
    entry("小結も強い", "こむすびもつよい", "The komusubi is also strong", 330,
        "小結 (komusubi) literally 'small knot' is fourth-highest rank. Despite name, these are elite wrestlers just below the san'yaku champion ranks."),
    entry("前頭の活躍", "まえがしらのかつやく", "The maegashira's performance", 335,
        "前頭 (maegashira) are rank-and-file wrestlers in top division, numbered 1-16. 活躍 (katsuyaku) means active performance. Lower maegashira can upset higher ranks for kinboshi."),
    entry("土俵の外に出る", "どひょうのそとにでる", "Going outside the ring", 340,
        "土俵 (dohyou) is the sacred ring where matches occur. Made of clay, 4.55m diameter, raised platform. Any body part touching outside the ring loses the match."),
    entry("土俵入りは伝統的だ", "どひょういりはでんとうてきだ", "The ring entering ceremony is traditional", 350,
        "土俵入り (dohyou-iri) is the ring entering ceremony performed by top wrestlers. Shows sumo's deep connection to Shinto religion and Japanese cultural traditions."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_complete() {
        for category in Category::ALL {
            for e in for_category(category) {
                assert!(!e.source_text.is_empty());
                assert!(!e.reading.is_empty(), "{} has no reading", e.source_text);
                assert!(!e.translation_text.is_empty());
                assert!(e.frequency_rank > 0);
            }
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(DAILY_LIFE.len(), 10);
        assert_eq!(FOOD.len(), 10);
        assert_eq!(CASUAL.len(), 10);
        assert_eq!(SUMO.len(), 20);
    }
}
