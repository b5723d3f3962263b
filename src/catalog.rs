use crate::model::{Activity, ActivityId, Category, DayPlan, Schedule, SATURDAY, SUNDAY};
use crate::schedule::PlanError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

fn entry(
    id: u32,
    title: &str,
    category: Category,
    mood: &str,
    icon: &str,
    description: &str,
    minutes: u32,
) -> Activity {
    let mut a = Activity::new(ActivityId::new(id.to_string()), title, category, mood, icon);
    a.description = Some(description.to_owned());
    a.duration = Some(minutes);
    a
}

/// Catalogue embarqué (50 activités). Jamais persisté : rechargé à chaque session.
pub fn builtin_catalog() -> Vec<Activity> {
    vec![
        entry(1, "Brunch", Category::Food, "😌 Relaxed", "Coffee", "Enjoy a leisurely brunch with friends or family", 90),
        entry(2, "Hiking", Category::Outdoors, "🥾 Energetic", "Mountain", "Explore nature trails and get some fresh air", 180),
        entry(3, "Movie Night", Category::Entertainment, "🎬 Cozy", "Film", "Watch a movie at home or at the cinema", 120),
        entry(4, "Read a Book", Category::Relax, "📚 Thoughtful", "BookOpen", "Dive into a good book and unwind", 60),
        entry(5, "Museum Visit", Category::Culture, "🎨 Curious", "Building2", "Explore art, history, or science exhibits", 150),
        entry(6, "Game Night", Category::Social, "🎲 Fun", "Gamepad2", "Play board games or video games with friends", 120),
        entry(7, "Cooking Class", Category::Learning, "👨‍🍳 Creative", "ChefHat", "Learn new recipes and cooking techniques", 120),
        entry(8, "Yoga Session", Category::Wellness, "🧘‍♀️ Peaceful", "Heart", "Practice yoga for physical and mental wellness", 60),
        entry(9, "Beach Day", Category::Outdoors, "🏖️ Sunny", "Sun", "Relax by the water and enjoy the sunshine", 240),
        entry(10, "Concert", Category::Entertainment, "🎵 Excited", "Music", "Attend a live music performance", 180),
        entry(11, "Photography Walk", Category::Outdoors, "📸 Inspired", "Mountain", "Capture nature or urban landscapes on camera", 120),
        entry(12, "Karaoke Night", Category::Entertainment, "🎤 Cheerful", "Music", "Sing your favorite songs with friends", 90),
        entry(13, "Potluck Dinner", Category::Food, "🍽️ Friendly", "ChefHat", "Share dishes and enjoy food with family or friends", 180),
        entry(14, "Cycling", Category::Outdoors, "🚴‍♂️ Adventurous", "Mountain", "Go for a bike ride through trails or parks", 150),
        entry(15, "Spa Day", Category::Wellness, "🧖‍♀️ Rejuvenated", "Heart", "Pamper yourself with massages and relaxation therapies", 120),
        entry(16, "Painting Class", Category::Learning, "🎨 Imaginative", "BookOpen", "Learn techniques to create beautiful artwork", 120),
        entry(17, "Camping", Category::Outdoors, "🔥 Adventurous", "Mountain", "Spend a night under the stars with campfires and tents", 480),
        entry(18, "Board Game Tournament", Category::Social, "♟️ Competitive", "Gamepad2", "Challenge friends in board games for fun prizes", 180),
        entry(19, "Gardening", Category::Relax, "🌱 Calm", "Building2", "Plant flowers or vegetables in your garden", 90),
        entry(20, "Dance Class", Category::Entertainment, "💃 Joyful", "Music", "Learn new dance moves and routines", 90),
        entry(21, "Stargazing", Category::Outdoors, "✨ Wonder", "Mountain", "Watch stars and constellations at night", 120),
        entry(22, "Wine Tasting", Category::Food, "🍷 Sophisticated", "ChefHat", "Sample a variety of wines with expert guidance", 120),
        entry(23, "Craft Workshop", Category::Learning, "🧵 Creative", "BookOpen", "Make handmade crafts and gifts", 150),
        entry(24, "Fishing", Category::Outdoors, "🎣 Relaxed", "Mountain", "Spend time fishing by the lake or river", 180),
        entry(25, "Picnic", Category::Food, "🍉 Joyful", "Sun", "Pack food and enjoy outdoor meals with friends", 180),
        entry(26, "Meditation Retreat", Category::Wellness, "🧘‍♂️ Serene", "Heart", "Participate in guided meditation sessions", 240),
        entry(27, "Sailing", Category::Outdoors, "⛵ Free", "Mountain", "Enjoy a day out sailing on a lake or sea", 180),
        entry(28, "Baking", Category::Learning, "🍰 Delightful", "ChefHat", "Bake delicious treats from scratch", 120),
        entry(29, "Volunteer Work", Category::Social, "🤝 Helpful", "Building2", "Support community projects or charitable events", 180),
        entry(30, "Theater Play", Category::Entertainment, "🎭 Dramatic", "Film", "Watch live theater performances", 150),
        entry(31, "Horse Riding", Category::Outdoors, "🐎 Brave", "Mountain", "Experience horseback riding adventures", 120),
        entry(32, "Photography Exhibit", Category::Culture, "📷 Curious", "Building2", "Visit a gallery showcasing stunning photographs", 90),
        entry(33, "Fruit Picking", Category::Outdoors, "🍓 Fresh", "Sun", "Pick fresh fruits from local farms", 150),
        entry(34, "Language Class", Category::Learning, "🗣️ Ambitious", "BookOpen", "Learn new languages with expert tutors", 120),
        entry(35, "Pottery Workshop", Category::Learning, "🖌️ Creative", "ChefHat", "Shape and paint pottery pieces", 150),
        entry(36, "City Tour", Category::Culture, "🏙️ Curious", "Building2", "Explore local attractions and landmarks", 180),
        entry(37, "Ice Skating", Category::Entertainment, "⛸️ Playful", "Sun", "Skate at a rink and enjoy winter fun", 120),
        entry(38, "Bird Watching", Category::Outdoors, "🦜 Observant", "Mountain", "Observe and photograph birds in their natural habitat", 120),
        entry(39, "Comedy Show", Category::Entertainment, "😂 Humorous", "Film", "Watch comedians perform live", 90),
        entry(40, "Sunset Walk", Category::Outdoors, "🌅 Peaceful", "Sun", "Take a walk while enjoying a beautiful sunset", 60),
        entry(41, "Music Workshop", Category::Learning, "🎸 Passionate", "Music", "Learn to play musical instruments or improve skills", 150),
        entry(42, "Fishing Trip", Category::Outdoors, "🎣 Relaxed", "Mountain", "Spend a full day fishing with friends or family", 240),
        entry(43, "Potluck Breakfast", Category::Food, "🥞 Sociable", "ChefHat", "Share homemade breakfast dishes with friends", 120),
        entry(44, "Archery Practice", Category::Outdoors, "🏹 Focused", "Mountain", "Improve your aim with archery sessions", 120),
        entry(45, "Board Game Design", Category::Learning, "🧠 Inventive", "Gamepad2", "Create and test new board game ideas", 180),
        entry(46, "Street Food Tour", Category::Food, "🌮 Adventurous", "ChefHat", "Taste local street food and discover new flavors", 150),
        entry(47, "Wellness Workshop", Category::Wellness, "🧘‍♀️ Balanced", "Heart", "Learn techniques for mental and physical well-being", 120),
        entry(48, "Botanical Garden Visit", Category::Outdoors, "🌼 Refreshing", "Building2", "Explore exotic plants and flowers", 120),
        entry(49, "Craft Fair", Category::Culture, "🎁 Delightful", "Building2", "Shop for handmade crafts and artworks", 180),
        entry(50, "Sunrise Meditation", Category::Wellness, "🌄 Centered", "Heart", "Start your day with peaceful meditation at sunrise", 60),
    ]
}

/// Nombre d'activités tirées par « plan surprise » : deux par jour du week-end.
const SURPRISE_PICKS: usize = 4;

/// Tire 4 activités de catégories deux à deux distinctes et les répartit
/// samedi (2) / dimanche (2). Les jours ajoutés ne sont pas touchés.
pub fn surprise_plan<R: Rng + ?Sized>(
    catalog: &[Activity],
    schedule: &Schedule,
    rng: &mut R,
) -> Result<Schedule, PlanError> {
    let mut shuffled: Vec<&Activity> = catalog.iter().collect();
    shuffled.shuffle(rng);

    let mut seen = HashSet::new();
    let mut picked: Vec<Activity> = Vec::with_capacity(SURPRISE_PICKS);
    for activity in shuffled {
        if seen.insert(activity.category) {
            picked.push(activity.clone());
        }
        if picked.len() == SURPRISE_PICKS {
            break;
        }
    }

    if picked.len() < SURPRISE_PICKS {
        return Err(PlanError::NotEnoughCategories(picked.len()));
    }

    let mut next = schedule.clone();
    let sunday_half = picked.split_off(SURPRISE_PICKS / 2);
    replace_day(&mut next, SATURDAY, picked);
    replace_day(&mut next, SUNDAY, sunday_half);
    Ok(next)
}

fn replace_day(schedule: &mut Schedule, key: &str, activities: Vec<Activity>) {
    match schedule.day_mut(key) {
        Some(day) => day.activities = activities,
        None => schedule.days.push(DayPlan { key: key.to_owned(), activities }),
    }
}
