//! Built-in input used when no file is given on the command line.
//!
//! Macbeth, Act V, Scene I (public domain).

pub const SAMPLE_TEXT: &str = "SCENE I. Dunsinane. Ante-room in the castle.

    Enter a Doctor of Physic and a Waiting-Gentlewoman

Doctor

    I have two nights watched with you, but can perceive
    no truth in your report. When was it she last walked?

Gentlewoman

    Since his majesty went into the field, I have seen
    her rise from her bed, throw her night-gown upon
    her, unlock her closet, take forth paper, fold it,
    write upon't, read it, afterwards seal it, and again
    return to bed; yet all this while in a most fast sleep.

Doctor

    A great perturbation in nature, to receive at once
    the benefit of sleep, and do the effects of
    watching! In this slumbery agitation, besides her
    walking and other actual performances, what, at any
    time, have you heard her say?

Gentlewoman

    That, sir, which I will not report after her.

Doctor

    You may to me: and 'tis most meet you should.

Gentlewoman

    Neither to you nor any one; having no witness to
    confirm my speech.

    Enter LADY MACBETH, with a taper

    Lo you, here she comes! This is her very guise;
    and, upon my life, fast asleep. Observe her; stand close.

Doctor

    How came she by that light?

Gentlewoman

    Why, it stood by her: she has light by her
    continually; 'tis her command.

Doctor

    You see, her eyes are open.

Gentlewoman

    Ay, but their sense is shut.

Doctor

    What is it she does now? Look, how she rubs her hands.

Gentlewoman

    It is an accustomed action with her, to seem thus
    washing her hands: I have known her continue in
    this a quarter of an hour.

LADY MACBETH

    Yet here's a spot.

Doctor

    Hark! she speaks: I will set down what comes from
    her, to satisfy my remembrance the more strongly.

LADY MACBETH

    Out, damned spot! out, I say!--One: two: why,
    then, 'tis time to do't.--Hell is murky!--Fie, my
    lord, fie! a soldier, and afeard? What need we
    fear who knows it, when none can call our power to
    account?--Yet who would have thought the old man
    to have had so much blood in him.

Doctor

    Do you mark that?

LADY MACBETH

    The thane of Fife had a wife: where is she now?--
    What, will these hands ne'er be clean?--No more o'
    that, my lord, no more o' that: you mar all with
    this starting.

Doctor

    Go to, go to; you have known what you should not.

Gentlewoman

    She has spoke what she should not, I am sure of
    that: heaven knows what she has known.

LADY MACBETH

    Here's the smell of the blood still: all the
    perfumes of Arabia will not sweeten this little
    hand. Oh, oh, oh!
";

pub fn sample_bytes() -> &'static [u8] {
    SAMPLE_TEXT.as_bytes()
}
